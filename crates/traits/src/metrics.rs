//! TextMetrics trait for abstracting glyph advance measurement.
//!
//! Layout needs the rendered width of every word it places. Where those widths come from
//! (a host text-measurement service, a font file, a fixed table) is up to the provider.

use simplepdf_style::TextStyle;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// The one typeface family the engine supports.
pub const BASE_FONT_FAMILY: &str = "Helvetica";

/// Error type for measurement operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// The measurement service could not be reached or refused to answer.
    #[error("Text metrics unavailable: {0}")]
    Unavailable(String),

    #[error("Font family '{0}' is not supported by this metrics provider")]
    UnsupportedFamily(String),
}

/// A source of advance widths.
///
/// Implementations must be deterministic: the same request always yields the same width.
///
/// # Implementations
///
/// - [`StandardMetrics`]: built-in Helvetica AFM widths (always available)
/// - [`CachedMetrics`]: memoizing wrapper around any other provider
pub trait TextMetrics: Send + Sync + Debug {
    /// Width in points of `text` set in `family` at `size` points.
    fn measure_advance(
        &self,
        text: &str,
        family: &str,
        size: f32,
        bold: bool,
        italic: bool,
    ) -> Result<f32, MetricsError>;

    /// Width of `text` in the given style, against the base family.
    fn measure(&self, text: &str, style: &TextStyle) -> Result<f32, MetricsError> {
        self.measure_advance(
            text,
            BASE_FONT_FAMILY,
            style.font_size,
            style.bold,
            style.italic,
        )
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for characters outside the ASCII table.
const FALLBACK_WIDTH: u16 = 556;

/// Fixed metrics for the four standard Helvetica faces.
///
/// The oblique faces share the upright widths, as in the Adobe AFM files.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardMetrics;

impl StandardMetrics {
    pub fn new() -> Self {
        Self
    }

    fn char_width(c: char, bold: bool) -> u16 {
        let table = if bold {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        match c as u32 {
            code @ 32..=126 => table[(code - 32) as usize],
            _ => FALLBACK_WIDTH,
        }
    }
}

impl TextMetrics for StandardMetrics {
    fn measure_advance(
        &self,
        text: &str,
        family: &str,
        size: f32,
        bold: bool,
        _italic: bool,
    ) -> Result<f32, MetricsError> {
        if !family.eq_ignore_ascii_case(BASE_FONT_FAMILY) {
            return Err(MetricsError::UnsupportedFamily(family.to_string()));
        }
        let units: u32 = text
            .chars()
            .map(|c| Self::char_width(c, bold) as u32)
            .sum();
        Ok(units as f32 * size / 1000.0)
    }

    fn name(&self) -> &'static str {
        "StandardMetrics"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    family: String,
    size_bits: u32,
    bold: bool,
    italic: bool,
}

/// Entry limit of [`CachedMetrics::new`].
pub const DEFAULT_CACHE_ENTRIES: usize = 65_536;

/// Memoizes the widths returned by another provider.
///
/// Output is identical to the wrapped provider's; failures are passed through and not
/// cached. The cache holds at most `max_entries` widths and is emptied when a new
/// measurement would exceed that, so a long-lived provider stays bounded.
#[derive(Debug)]
pub struct CachedMetrics<M: TextMetrics> {
    inner: M,
    max_entries: usize,
    cache: RwLock<HashMap<MeasureKey, f32>>,
}

impl<M: TextMetrics> CachedMetrics<M> {
    pub fn new(inner: M) -> Self {
        Self::with_max_entries(inner, DEFAULT_CACHE_ENTRIES)
    }

    /// A limit of 0 disables caching.
    pub fn with_max_entries(inner: M, max_entries: usize) -> Self {
        Self {
            inner,
            max_entries,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Number of cached measurements.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Does nothing if the lock is poisoned.
    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: TextMetrics> TextMetrics for CachedMetrics<M> {
    fn measure_advance(
        &self,
        text: &str,
        family: &str,
        size: f32,
        bold: bool,
        italic: bool,
    ) -> Result<f32, MetricsError> {
        let key = MeasureKey {
            text: text.to_string(),
            family: family.to_string(),
            size_bits: size.to_bits(),
            bold,
            italic,
        };
        if let Ok(cache) = self.cache.read()
            && let Some(width) = cache.get(&key)
        {
            return Ok(*width);
        }
        let width = self.inner.measure_advance(text, family, size, bold, italic)?;
        if self.max_entries > 0
            && let Ok(mut cache) = self.cache.write()
        {
            if cache.len() >= self.max_entries {
                cache.clear();
            }
            cache.insert(key, width);
        }
        Ok(width)
    }

    fn name(&self) -> &'static str {
        "CachedMetrics"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingMetrics {
        calls: AtomicUsize,
    }

    impl TextMetrics for CountingMetrics {
        fn measure_advance(
            &self,
            text: &str,
            _family: &str,
            size: f32,
            _bold: bool,
            _italic: bool,
        ) -> Result<f32, MetricsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(text.len() as f32 * size)
        }

        fn name(&self) -> &'static str {
            "CountingMetrics"
        }
    }

    #[test]
    fn test_standard_metrics_known_widths() {
        let m = StandardMetrics::new();
        // o n e space: 556 * 3 + 278
        let w = m.measure_advance("one ", "Helvetica", 12.0, false, false).unwrap();
        assert!((w - 23.352).abs() < 1e-3);
        // Bold 'n' is wider than regular 'n'.
        let regular = m.measure_advance("n", "Helvetica", 10.0, false, false).unwrap();
        let bold = m.measure_advance("n", "Helvetica", 10.0, true, false).unwrap();
        assert!(bold > regular);
    }

    #[test]
    fn test_standard_metrics_italic_shares_upright_widths() {
        let m = StandardMetrics::new();
        let upright = m.measure_advance("Title", "Helvetica", 22.0, true, false).unwrap();
        let slanted = m.measure_advance("Title", "Helvetica", 22.0, true, true).unwrap();
        assert_eq!(upright, slanted);
    }

    #[test]
    fn test_standard_metrics_rejects_other_families() {
        let m = StandardMetrics::new();
        let err = m.measure_advance("x", "Times", 12.0, false, false).unwrap_err();
        assert_eq!(err, MetricsError::UnsupportedFamily("Times".to_string()));
    }

    #[test]
    fn test_measure_uses_style() {
        let m = StandardMetrics::new();
        let style = TextStyle::default().with_font_size(24.0);
        let w = m.measure("i", &style).unwrap();
        assert!((w - 222.0 * 24.0 / 1000.0).abs() < 1e-4);
    }

    #[test]
    fn test_cached_metrics_memoizes() {
        let cached = CachedMetrics::new(CountingMetrics::default());
        let a = cached.measure_advance("word", "Helvetica", 12.0, false, false).unwrap();
        let b = cached.measure_advance("word", "Helvetica", 12.0, false, false).unwrap();
        assert_eq!(a, b);
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);

        cached.measure_advance("word", "Helvetica", 14.0, false, false).unwrap();
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
        assert_eq!(cached.len(), 2);

        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn test_cached_metrics_stays_within_entry_limit() {
        let cached = CachedMetrics::with_max_entries(CountingMetrics::default(), 3);
        for i in 0..10 {
            let word = format!("word{}", i);
            let width = cached.measure_advance(&word, "Helvetica", 12.0, false, false).unwrap();
            assert_eq!(width, word.len() as f32 * 12.0);
            assert!(cached.len() <= 3);
        }
        // Resets on the 4th, 7th and 10th insert.
        assert_eq!(cached.len(), 1);

        let uncached = CachedMetrics::with_max_entries(CountingMetrics::default(), 0);
        uncached.measure_advance("a", "Helvetica", 12.0, false, false).unwrap();
        uncached.measure_advance("a", "Helvetica", 12.0, false, false).unwrap();
        assert!(uncached.is_empty());
        assert_eq!(uncached.inner().calls.load(Ordering::SeqCst), 2);
    }
}

//! Serialization of a [`Document`] into PDF bytes.
//!
//! Layout of the output:
//!
//! ```text
//! %PDF-1.4
//! 1 0 obj ... endobj          (every object, in id order)
//! xref
//! 0 <n+1>
//! 0000000000 65535 f
//! <offset> 00000 n            (one line per object)
//! trailer
//! << /Size <n+1> /Root 1 0 R >>
//! startxref
//! <xref offset>
//! %%EOF
//! ```

use crate::document::{Document, CATALOG_ID, PAGES_ID};
use crate::error::RenderError;
use itertools::Itertools;
use log::debug;
use simplepdf_traits::{DocumentSink, PDF_MIME_TYPE};
use std::io::{Cursor, Seek, Write};

/// Name used by [`Document::save_default`].
pub const DEFAULT_FILENAME: &str = "document.pdf";

impl Document {
    /// Fills every placeholder slot: page streams and dictionaries, the page tree and the
    /// catalog. Re-running it rewrites the same bodies.
    fn resolve_placeholders(&mut self) -> Result<(), RenderError> {
        let resources = self.fonts.resource_dictionary();
        for page in &self.pages {
            let stream = page.stream();
            self.objects.overwrite(
                page.content_id,
                format!("<< /Length {} >>\nstream\n{}\nendstream", stream.len(), stream),
            )?;
            self.objects.overwrite(
                page.page_id,
                format!(
                    "<< /Type /Page /Parent {} /MediaBox [0 0 {} {}] /Resources {} /Contents {} >>",
                    PAGES_ID.reference(),
                    page.width,
                    page.height,
                    resources,
                    page.content_id.reference()
                ),
            )?;
        }

        let kids = self.pages.iter().map(|p| p.page_id.reference()).join(" ");
        self.objects.overwrite(
            PAGES_ID,
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, self.pages.len()),
        )?;
        self.objects.overwrite(
            CATALOG_ID,
            format!("<< /Type /Catalog /Pages {} >>", PAGES_ID.reference()),
        )?;
        Ok(())
    }

    /// Produces the complete PDF byte sequence.
    ///
    /// The document stays usable afterwards; finalizing again without further drawing
    /// yields identical bytes.
    pub fn finalize(&mut self) -> Result<Vec<u8>, RenderError> {
        let mut cursor = Cursor::new(Vec::new());
        self.write_to(&mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Streams the PDF into `writer`. Cross-reference offsets are relative to the writer's
    /// position on entry.
    pub fn write_to<W: Write + Seek>(&mut self, writer: &mut W) -> Result<(), RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::NoPages);
        }
        self.resolve_placeholders()?;
        debug!(
            "Finalizing document: {} pages, {} objects",
            self.pages.len(),
            self.objects.len()
        );

        let start = writer.stream_position()?;
        writer.write_all(b"%PDF-1.4\n")?;

        let mut offsets = Vec::with_capacity(self.objects.len());
        for (id, body) in self.objects.iter() {
            let offset = internal_writer::write_indirect_object(writer, start, id.number(), body)?;
            offsets.push(offset);
        }

        let xref_start = writer.stream_position()? - start;
        internal_writer::write_xref(writer, &offsets)?;
        internal_writer::write_trailer(writer, offsets.len() + 1, CATALOG_ID.number(), xref_start)?;
        writer.flush()?;

        debug!(
            "Finalized document: {} bytes",
            writer.stream_position()? - start
        );
        Ok(())
    }

    /// Finalizes the document and hands it to `sink` as `application/pdf`.
    pub fn save(&mut self, filename: &str, sink: &mut dyn DocumentSink) -> Result<(), RenderError> {
        let bytes = self.finalize()?;
        sink.store(filename, &bytes, PDF_MIME_TYPE)?;
        debug!("Saved '{}' to {}", filename, sink.name());
        Ok(())
    }

    /// [`Document::save`] under the name `document.pdf`.
    pub fn save_default(&mut self, sink: &mut dyn DocumentSink) -> Result<(), RenderError> {
        self.save(DEFAULT_FILENAME, sink)
    }
}

mod internal_writer {
    use log::trace;
    use std::io::{self, Seek, Write};

    /// Writes `n 0 obj` .. `endobj` and returns the object's offset from `start`.
    pub fn write_indirect_object<W: Write + Seek>(
        writer: &mut W,
        start: u64,
        number: u32,
        body: &str,
    ) -> io::Result<u64> {
        let offset = writer.stream_position()? - start;
        write!(writer, "{} 0 obj\n{}\nendobj\n", number, body)?;
        trace!("object {} at offset {}", number, offset);
        Ok(offset)
    }

    /// A single subsection covering object 0 (the free-list head) through the last object.
    pub fn write_xref<W: Write>(writer: &mut W, offsets: &[u64]) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", offsets.len() + 1)?;
        writeln!(writer, "0000000000 65535 f ")?;
        for offset in offsets {
            writeln!(writer, "{:010} 00000 n ", offset)?;
        }
        Ok(())
    }

    pub fn write_trailer<W: Write>(
        writer: &mut W,
        size: usize,
        root: u32,
        xref_start: u64,
    ) -> io::Result<()> {
        writeln!(writer, "trailer")?;
        writeln!(writer, "<< /Size {} /Root {} 0 R >>", size, root)?;
        writeln!(writer, "startxref")?;
        writeln!(writer, "{}", xref_start)?;
        write!(writer, "%%EOF")
    }
}

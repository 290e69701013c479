//! Low-level nom parser functions for CSS-like style values.
//!
//! This module parses lengths and the `property: value; ...` declaration lists found in
//! inline `style` attributes, and folds the declarations it understands into a
//! [`StyleOverride`].

use crate::font::{FontStyle, FontWeight};
use crate::style::StyleOverride;
use crate::text::TextDecoration;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while, take_while1};
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::sequence::{delimited, separated_pair};
use nom::{IResult, Parser};
use simplepdf_types::Color;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Length Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("pt"), |_| 1.0),
        map(tag_no_case("px"), |_| 1.0), // Treat px as pt
        map(tag_no_case("in"), |_| 72.0),
        map(tag_no_case("cm"), |_| 28.35),
        map(tag_no_case("mm"), |_| 2.835),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, value * unit_multiplier.unwrap_or(1.0)))
}

/// Parses a complete length string, surrounding whitespace allowed.
pub fn parse_length_value(input: &str) -> Result<f32, StyleParseError> {
    all_consuming(delimited(multispace0, parse_length, multispace0))
        .parse(input)
        .map(|(_, value)| value)
        .map_err(|_| StyleParseError::Parse(format!("Invalid length: '{}'", input)))
}

// --- Declaration Parsers ---

fn property_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-').parse(input)
}

/// One `property: value` pair. The value runs to the end of the input.
fn declaration(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        delimited(multispace0, property_name, multispace0),
        char(':'),
        map(take_while(|c: char| c != ';'), str::trim),
    )
    .parse(input)
}

/// Splits a declaration list into `(property, value)` pairs.
///
/// Empty segments (`a: b;;`) are skipped. A segment that is not a declaration yields an
/// error in its place so the remaining declarations are still usable.
pub fn parse_declarations(input: &str) -> Vec<Result<(String, String), StyleParseError>> {
    input
        .split(';')
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| {
            all_consuming(declaration)
                .parse(segment)
                .map(|(_, (property, value))| (property.to_ascii_lowercase(), value.to_string()))
                .map_err(|_| {
                    StyleParseError::Parse(format!("Malformed declaration: '{}'", segment.trim()))
                })
        })
        .collect()
}

/// A font size must be a finite length above zero.
pub fn validate_font_size(size: f32) -> Result<f32, StyleParseError> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(StyleParseError::InvalidValue {
            property: "font-size".to_string(),
            value: size.to_string(),
        })
    }
}

/// Parses a `font-size` value such as `14px`, rejecting zero, negative and non-finite sizes.
pub fn parse_font_size(value: &str) -> Result<f32, StyleParseError> {
    let invalid = || StyleParseError::InvalidValue {
        property: "font-size".to_string(),
        value: value.to_string(),
    };
    let size = parse_length_value(value).map_err(|_| invalid())?;
    validate_font_size(size).map_err(|_| invalid())
}

/// Applies one declaration to `target`.
///
/// Only the properties text layout understands are read. Any other property is accepted
/// and ignored, as a browser would.
pub fn apply_declaration(
    target: &mut StyleOverride,
    property: &str,
    value: &str,
) -> Result<(), StyleParseError> {
    let invalid = |_| StyleParseError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    };
    match property {
        "color" => target.color = Some(Color::parse(value).map_err(invalid)?),
        "font-size" => target.font_size = Some(parse_font_size(value)?),
        "font-weight" => target.font_weight = Some(value.parse::<FontWeight>().map_err(invalid)?),
        "font-style" => target.font_style = Some(value.parse::<FontStyle>().map_err(invalid)?),
        "text-decoration" | "text-decoration-line" => {
            target.text_decoration = Some(TextDecoration::parse(value).map_err(invalid)?)
        }
        _ => {}
    }
    Ok(())
}

/// Parses an inline `style` attribute.
///
/// Returns the override built from every valid declaration, together with the errors for
/// the declarations that were skipped.
pub fn parse_inline_style(input: &str) -> (StyleOverride, Vec<StyleParseError>) {
    let mut style = StyleOverride::default();
    let mut errors = Vec::new();
    for parsed in parse_declarations(input) {
        match parsed.and_then(|(property, value)| apply_declaration(&mut style, &property, &value))
        {
            Ok(()) => {}
            Err(e) => errors.push(e),
        }
    }
    (style, errors)
}

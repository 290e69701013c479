pub mod dimension;
pub mod font;
pub mod parsers;
pub mod style;
pub mod text;

pub use dimension::{Margins, PageSize};
pub use font::{FontStyle, FontWeight};
pub use parsers::StyleParseError;
pub use style::{StyleOverride, TextStyle};
pub use text::TextDecoration;

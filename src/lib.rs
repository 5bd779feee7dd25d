//! Turns captured terminal output (text mixed with ANSI escape sequences) into an
//! HTML fragment of balanced `<span>` elements.
//!
//! ```
//! let html = ansipage::convert("\x1B[31mFAIL\x1B[0m <done>");
//! assert_eq!(
//! 	html.as_str(),
//! 	"<span></span><span class=\"red\">FAIL</span><span class=\"\"> &lt;done&gt;</span>"
//! );
//! ```
//!
//! Only a small fixed palette and bold, italic and underline are understood. Other
//! codes and non-SGR sequences are dropped and reported as [`Warning`]s through
//! [`Conversion`] and the `log` facade.

pub mod converter;
pub mod html;
pub mod parser;
pub mod styles;
pub mod warning;

pub use converter::{Conversion, convert};
pub use html::Html;
pub use warning::Warning;

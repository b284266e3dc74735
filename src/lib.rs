//! Turns JSON parser failures into precise, human-readable diagnostics.
//!
//! ```
//! use byteout::{SyntaxError, locate};
//!
//! let failure = SyntaxError::new("Unexpected token } in JSON at position 5");
//! let diagnostic = locate(&failure, "{\"a\":}").unwrap();
//! assert_eq!((diagnostic.line, diagnostic.column), (1, 6));
//! assert_eq!(diagnostic.error_char, Some('}'));
//! ```

pub mod classify;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod locale;
pub mod parse_error;
pub mod position;

pub use classify::{classify, strip_prefix};
pub use config::Config;
pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use locale::Locale;
pub use parse_error::{SyntaxError, locate, locate_with};
pub use position::{ColumnUnit, Resolved, offset_of, resolve};

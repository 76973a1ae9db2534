//! Shell-style word splitting.
//!
//! Turns a command line into the words a POSIX-like shell would pass as
//! arguments, handling single quotes, double quotes and backslash escapes.
//! Fields are split on Unicode whitespace, so a full-width space separates
//! words just like an ASCII one.
//!
//! Splitting never fails. An unterminated quote is closed at the end of the
//! input and a dangling backslash is dropped:
//!
//! ```
//! assert_eq!(
//!     shsplit::split("stuff var='more stuff"),
//!     vec!["stuff", "var=more stuff"],
//! );
//! ```
//!
//! No expansion of any kind happens: `$VAR`, globs, `#` and operators such as
//! `|` are ordinary characters.

mod state;
mod tokenizer;

pub use state::{Mode, ScanState, is_double_quote_escapable};
pub use tokenizer::{Words, split};

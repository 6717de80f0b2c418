/*!
# Rust Language Module

This Rust module splits Modify program text into lines and command words,
and defines the errors reported while running it.

*/

/// 1-based line position shown to the user, if known.
pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use token::Word;

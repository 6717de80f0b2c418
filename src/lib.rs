//! # Modify
//!
//! A line-oriented esolang whose program text is also its memory.
//! Every line can be read as data and rewritten while the program runs,
//! and the only way to branch is to rewrite a line conditionally.
//!
//! Run a script with `modify script.modify`, or add `-v` to echo a
//! description of every instruction as it executes.
//! ```text
//! setreg a 5
//! println a
//! ```
//! prints `5`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/commands.rs"]
#[allow(non_snake_case)]
pub mod __Commands;

pub mod lang;
pub mod mach;
pub mod term;

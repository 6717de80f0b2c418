/*!
## Rust Machine Module

This Rust module is the virtual machine for Modify. Program text is the
machine's memory: commands read and rewrite lines while they run.

*/

mod command;
mod eval;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use command::{Command, Control, Outcome};
pub use eval::evaluate;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::{Register, Var};

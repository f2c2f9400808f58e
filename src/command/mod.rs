//! Text front end for a list session.
//!
//! - `parser.rs` - Command language (`add`, `edit`, `delete-many`, JSON actions, ...)
//! - `session.rs` - Store plus view-local selection, executes commands
//! - `runner.rs` - Line loop and plain text output

mod parser;
mod runner;
mod session;

pub use parser::{parse_line, Command, CommandError};
pub use runner::{render_history, render_props, run_lines, RunSummary};
pub use session::{Outcome, Session};

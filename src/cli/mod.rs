//! Interactive command-line front end
//!
//! This module contains the presentation layer: validated console input and
//! the menu loop that drives a budget engine.

pub mod prompt;
pub mod session;

pub use prompt::Prompter;
pub use session::{MenuChoice, Session};

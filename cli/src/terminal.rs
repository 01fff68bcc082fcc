//! Terminal presentation layer: logging setup, prompting, and the
//! width-aware display helpers the session prints through.

pub mod banner;
pub mod colors;
pub mod format;
pub mod logging;
pub mod print;
pub mod prompt;

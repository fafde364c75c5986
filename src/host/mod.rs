//! Host environment module
//!
//! Display surfaces, the page that holds them and the input they receive.

pub mod input;
pub mod page;
pub mod surface;

// Re-export main types
pub use input::{key_code, parse_line, read_input, InputEvent};
pub use page::Page;
pub use surface::{DisplaySurface, TerminalSurface};

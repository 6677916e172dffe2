//! Snapshot Types

mod guild;
mod platform;
mod viewer;

pub use guild::*;
pub use platform::*;
pub use viewer::*;

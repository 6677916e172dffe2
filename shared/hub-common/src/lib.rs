//! Guild Hub Common Library
//!
//! Snapshot types shared by the access engine and any front end that feeds it.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

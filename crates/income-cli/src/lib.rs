//! Library components of the `income-predict` command.

pub mod error;
pub mod logging;
pub mod pipeline;
pub mod preview;

pub use error::{ProcessingError, RunError};

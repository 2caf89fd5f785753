//! Value normalization applied before encoding:
//! - **placeholder**: sentinel `?` replacement
//! - **numeric**: lenient numeric coercion

pub mod numeric;
pub mod placeholder;

pub use numeric::{coerce_numeric, parse_numeric};
pub use placeholder::replace_sentinel;

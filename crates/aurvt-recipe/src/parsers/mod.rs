//! PKGBUILD field extraction.
//!
//! Entry points: [`extract_field`] for scalar assignments and
//! [`extract_source_array`] for the `source=(...)` array.

mod fields;
mod sources;

pub use fields::{clean_value, extract_field};
pub use sources::extract_source_array;

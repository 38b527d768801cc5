//! Derive macros shared across the crate.

#[allow(unused_imports)]
pub use derive_more::{Display, Into};

//! HTTP handlers for toys and customer reviews.

pub mod review;
pub mod toy;
pub use review::*;
pub use toy::*;

//! Typed find queries and request-parameter parsing. Filters are exact-match only;
//! sorting and limits are executed by the database.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;

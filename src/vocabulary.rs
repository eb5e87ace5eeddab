//! Closed vocabularies consulted by the rule chain.
//!
//! All tables here are immutable after construction: a route keyword table,
//! a category name list, and the confirmation/denial phrase sets. They are
//! supplied as configuration, either from the built-in storefront vocabulary
//! or from a JSON file, and never derived or mutated at interpretation time.

pub mod categories;
pub mod config;
pub mod phrases;
pub mod routes;

// Re-export commonly used types
pub use categories::*;
pub use config::*;
pub use phrases::*;
pub use routes::*;

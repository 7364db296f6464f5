//! Read-only searches over the marketplace entities.
//!
//! Each service dispatches on exactly which optional query fields are
//! present: the combinations the surface supports each map to a fixed
//! filter, unsupported combinations report no matches, and an empty query
//! lists every active row. Soft deleted rows never appear in results.

pub mod job;
pub mod material;
pub mod profession;
pub mod shop;

pub use profession::ProfessionSearchResult;

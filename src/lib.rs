//! Setu marketplace backend.
//!
//! Connects house owners posting jobs with skilled workers and material
//! shops. The [`model`] module holds the wire DTOs shared by every endpoint;
//! [`server`] holds the HTTP surface, services, and data access behind it.

pub mod model;
pub mod server;

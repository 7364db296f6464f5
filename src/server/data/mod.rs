//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, one per table, plus a generic lifecycle repository shared by
//! every soft-deletable entity.

pub mod address;
pub mod job;
pub mod lifecycle;
pub mod material_stock;
pub mod profession;
pub mod role;
pub mod shop;
pub mod shop_type;
pub mod user;
pub mod verification;
pub mod work_type;

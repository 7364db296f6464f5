//! Wire DTOs shared by the HTTP surface.

pub mod address;
pub mod api;
pub mod auth;
pub mod job;
pub mod material;
pub mod profession;
pub mod search;
pub mod shop;
pub mod user;

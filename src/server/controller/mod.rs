//! HTTP controller endpoints for the marketplace API.
//!
//! This module contains the Axum handlers for authentication, account
//! management, addresses, shops, material stock, worker professions, and job
//! postings with their offer workflow. Controllers unpack the request, run
//! the matching service, and shape the response; every endpoint carries a
//! utoipa annotation for the generated OpenAPI document.

pub mod address;
pub mod auth;
pub mod job;
pub mod material_stock;
pub mod profession;
pub mod shop;
pub mod user;

//! Server application core modules.
//!
//! This module contains all server-side functionality for the Setu application,
//! including HTTP routing, bearer-token authentication, database operations,
//! payload validation, and the job offer workflow. It provides the complete
//! backend infrastructure for the marketplace's users, addresses, shops,
//! material stock, professions, and jobs.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod validate;

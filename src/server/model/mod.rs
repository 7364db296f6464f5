//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including
//! application state, bearer token claims and the authenticated-user extractor,
//! the in-process job applicant roster, and the pending verification codes.
//! These models bridge the gap between database entities and HTTP handlers.

pub mod app;
pub mod auth;
pub mod otp;
pub mod roster;

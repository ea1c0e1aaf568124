//! HTTP layer for the Storefront backend.
//!
//! Exposes [`app::create_app`] so the binary and the integration tests
//! build exactly the same service tree.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

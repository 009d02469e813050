//! HTTP layer for the phone verify backend
//!
//! Exposes the three verification operations as callable endpoints and
//! wires the core service to the Twilio client and the MySQL profile store.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

//! LeadLab HTTP server library.
//!
//! The binary in `main.rs` wires configuration, state, and the listener;
//! everything routable lives here so integration tests can drive the API
//! without binding a socket.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

//! Sevad library - exposes the router for testing

pub mod routes;
pub mod server;

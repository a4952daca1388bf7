//! Minimal HTTP surface for hosting-platform liveness probes.
//!
//! Deliberately decoupled from the bot: no shared state, so the probes keep
//! answering no matter what the dispatcher is doing.

pub mod handlers;
pub mod routes;
pub mod server;

//! scrollkeep — scroll-position persistence and restoration engine.
//!
//! Saves per-route viewport offsets into an in-memory map mirrored to a
//! session-scoped durable store, and restores them on route entry. Routing
//! and rendering stay outside: the engine consumes a route key and a
//! [`runtime::Viewport`], and everything (including time) is injected, so the
//! whole save/restore lifecycle runs deterministically under test.

pub mod config;
pub mod engine;
pub mod expiry;
pub mod restore;
pub mod runtime;
pub mod sampler;
pub mod store;
pub mod types;

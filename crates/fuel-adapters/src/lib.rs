//! Fuel adapters - Infrastructure implementations
//!
//! This crate contains concrete implementations of the ports defined in fuel-core:
//! a blocking `ureq` HTTP transport driven from tokio, a TOML file for the
//! persisted session, and in-memory doubles used by tests across the workspace.

pub mod http;
pub mod storage;
pub mod testing;

pub use http::UreqTransport;
pub use storage::TomlKeyValueStore;
pub use testing::{FailingTransport, MemoryKeyValueStore, StubTransport};

mod failing_transport;
mod memory_store;
mod stub_transport;

pub use failing_transport::FailingTransport;
pub use memory_store::MemoryKeyValueStore;
pub use stub_transport::StubTransport;

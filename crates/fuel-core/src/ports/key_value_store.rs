use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyValueStoreError {
    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Durable string key-value storage for client state (base URL, token, email).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

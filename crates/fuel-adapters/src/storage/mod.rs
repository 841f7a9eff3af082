mod toml_store;

pub use toml_store::TomlKeyValueStore;

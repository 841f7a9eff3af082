//! Fuel core library
//!
//! Contains domain types, port definitions (traits) and the API gateway client
//! used to talk to the fueling prediction backend. This crate has no knowledge
//! of a concrete HTTP stack or storage backend.

pub mod config;
pub mod domain;
pub mod gateway;
pub mod ports;

pub use config::{compiled_default_base_url, ApiConfig, Config, ConfigError, FetchConfig, CLOUD_BASE_URL};
pub use domain::{
    is_local_dev_url, AthleteProfile, Connectivity, IntensityMode, PlannerState, ProfileFieldError,
    Session, SessionType, SimulationDeltas, SportOption, UnknownOptionError,
};
pub use gateway::{ApiClient, ApiError, SimpleOk};
pub use ports::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, KeyValueStore, KeyValueStoreError,
    TransportError, TransportErrorKind,
};

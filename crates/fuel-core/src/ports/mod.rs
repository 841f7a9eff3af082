mod http_transport;
mod key_value_store;

pub use http_transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError, TransportErrorKind,
};
pub use key_value_store::{KeyValueStore, KeyValueStoreError};

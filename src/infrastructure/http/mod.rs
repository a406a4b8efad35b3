//! HTTP dispatch core: transport, retry policy, response cache, dispatcher.

pub mod cache;
pub mod dispatcher;
pub mod retry;
pub mod transport;

pub use cache::{ResponseCache, DEFAULT_CACHE_TTL};
pub use dispatcher::{Dispatcher, RequestOptions, DEFAULT_TIMEOUT};
pub use retry::RetryPolicy;
pub use transport::HttpTransport;

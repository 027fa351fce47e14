pub mod http;
pub mod transport;

pub use self::http::HttpClient;
pub use self::transport::{RawResponse, Transport};

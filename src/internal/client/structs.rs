pub mod http_client_config;

pub use http_client_config::HttpClientConfig;

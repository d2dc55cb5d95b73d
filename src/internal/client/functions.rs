pub mod shared_client;

pub use shared_client::{init_shared_client, shared_client};

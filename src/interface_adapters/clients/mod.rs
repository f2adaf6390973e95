// Reqwest clients for external services.

pub mod store;

pub use store::{RecordStoreClient, StoreConfig};

mod store;

pub use store::{BypassCredentials, StoreConfig};

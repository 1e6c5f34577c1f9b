pub mod store;
pub mod loader;

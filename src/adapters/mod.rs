// Adapters layer: concrete implementations for the store port, the HTTP surface and the HTTP client.

pub mod client;
pub mod http;
pub mod storage;

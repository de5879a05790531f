//! Transport layer for the Bountyhub SDK.

pub mod http;

pub use http::HttpTransport;

//! HTTP access to the remote listing collection.

mod client;
mod endpoint;

pub use client::ResourceClient;
pub use endpoint::ResourceEndpoint;

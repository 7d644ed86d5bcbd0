//! Remote inventory

pub mod client;
pub mod errors;
pub mod service;

pub use client::{LessonsClient, RemoteConfig};
pub use errors::RemoteError;
pub use service::*;

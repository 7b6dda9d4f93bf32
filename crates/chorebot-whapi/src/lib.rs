//! Outbound delivery of chat replies through the Whapi.cloud HTTP API.

pub mod client;

pub use client::WhapiNotifier;

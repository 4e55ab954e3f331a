//! # ocdb-gateways
//!
//! Concrete implementations of the gateway traits declared in
//! `ocdb-core`.

pub mod geoloc;
pub mod weather;

#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ocdb-core
//!
//! Issue store contract, lifecycle operations and snapshot aggregation
//! for OpenCivicDB.

pub use ocdb_entities as entities;

pub mod gateways;
pub mod repositories;
pub mod stats;
pub mod subscriptions;
pub mod usecases;

pub use self::repositories::Error as RepoError;

#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ocdb-entities
//!
//! Reusable, agnostic domain entities for OpenCivicDB.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod comment;
pub mod geo;
pub mod id;
pub mod issue;
pub mod status;
pub mod time;
pub mod user;
pub mod weather;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

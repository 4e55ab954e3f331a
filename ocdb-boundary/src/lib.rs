//! # ocdb-boundary
//!
//! Serializable, anemic data structures matching the persisted issue
//! document schema.
//!
//! Documents written by older clients may omit fields; all fields that
//! have a documented default are therefore optional here. Mapping such
//! partial documents onto well-formed domain entities happens in the
//! conversions of the `entity-conversions` feature.

use serde::{Deserialize, Serialize};

/// One issue document as persisted in the store.
///
/// Field names follow the wire format of the issue collection
/// (camelCase).
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDoc {
    pub id                   : String,
    pub category             : Option<String>,
    #[serde(default)]
    pub description          : String,
    pub lat                  : f64,
    pub lng                  : f64,
    pub image_url            : Option<String>,
    pub status               : Option<String>,
    #[serde(default)]
    pub votes                : u64,
    #[serde(default)]
    pub voted_by             : Vec<String>,
    #[serde(default)]
    pub comments             : Vec<CommentDoc>,
    pub reported_by          : Option<String>,
    /// Milliseconds since the Unix epoch; absent until the store
    /// has confirmed the creation.
    pub created_at           : Option<i64>,
}

/// One comment embedded in an issue document.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDoc {
    pub id         : String,
    pub user_id    : String,
    #[serde(default)]
    pub text       : String,
    pub created_at : Option<i64>,
}

#[cfg(feature = "entity-conversions")]
mod conv;

use crate::{id::*, time::*, user::*};

/// A comment embedded in an issue document.
///
/// Comments are append-only and cannot be edited or deleted.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub author     : UserId,
    // None until the store has confirmed the write and assigned
    // the authoritative timestamp.
    pub created_at : Option<Timestamp>,
    pub text       : String,
}

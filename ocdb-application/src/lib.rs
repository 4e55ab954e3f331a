//! # ocdb-application
//!
//! Application flows on top of the issue store contract: each flow
//! wraps one lifecycle operation with logging and the documented
//! failure semantics (no automatic retry, no optimistic local
//! mutation), plus the live feed that derives view state from pushed
//! collection snapshots.

mod add_comment;
mod live_feed;
mod report_issue;
mod set_issue_status;
mod upvote_issue;

pub mod prelude {
    pub use super::{
        add_comment::*, live_feed::*, report_issue::*, set_issue_status::*, upvote_issue::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ocdb_core::{repositories::*, subscriptions::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

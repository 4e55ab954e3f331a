// Low-level store access traits.
//
// The issue store is a document database: one document per issue,
// mutated exclusively through atomic field-level operations so that
// concurrent writers never clobber each other's unrelated changes.
// Cross-document transactions are neither offered nor required.

use std::io;

use thiserror::Error;

use crate::entities::{
    category::Category, comment::Comment, geo::MapPoint, id::Id, issue::Issue,
    status::IssueStatus, user::UserId,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Fields supplied by the reporter.
///
/// Everything else (id, creation timestamp, vote and comment
/// containers) is initialized by the store on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIssueRecord {
    pub category: Category,
    pub description: String,
    pub position: MapPoint,
    pub image_url: String,
    pub status: IssueStatus,
    pub reported_by: UserId,
}

/// One atomic partial update against a single issue document.
///
/// These map onto the store's server-side field primitives (numeric
/// increment, array union, single-field set). They are commutative
/// between concurrent writers, which is why they are used instead of
/// read-modify-write against a locally cached copy.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueUpdate {
    /// Conditional set-add: register the voter and increment the vote
    /// count by one, but only if the voter is not yet present in
    /// `voted_by`. Membership in `voted_by` is the authoritative gate;
    /// a duplicate vote is a silent no-op on the store side.
    CastVote { voter: UserId },
    /// Append a single comment. The store assigns the authoritative
    /// timestamp on appending.
    AppendComment(Comment),
    /// Single-field status set. Any transition is permitted.
    SetStatus(IssueStatus),
}

pub trait IssueRepo {
    /// The store assigns the id and the creation timestamp.
    fn create_issue(&self, new_issue: NewIssueRecord) -> Result<Id>;

    fn get_issue(&self, id: &str) -> Result<Issue>;
    fn all_issues(&self) -> Result<Vec<Issue>>;
    fn count_issues(&self) -> Result<usize>;

    /// Apply a single atomic partial update, never a full-document
    /// rewrite.
    fn update_issue(&self, id: &str, update: IssueUpdate) -> Result<()>;
}

use ocdb_entities::user::UserId;

use crate::{usecases, IssueRepo, Result};

/// Outcome of a vote attempt as presented to the caller.
///
/// "Already voted" is an expected signal, not a failure: the view
/// disables the vote control instead of showing an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Counted,
    AlreadyVoted,
}

pub fn upvote_issue<R: IssueRepo>(
    store: &R,
    issue_id: &str,
    voter: &UserId,
) -> Result<VoteOutcome> {
    // The precondition is checked against a fresh read; the store
    // remains the authoritative gate either way.
    let issue = usecases::get_issue(store, issue_id)?;
    match usecases::upvote_issue(store, &issue, voter) {
        Ok(()) => Ok(VoteOutcome::Counted),
        Err(usecases::Error::AlreadyVoted) => Ok(VoteOutcome::AlreadyVoted),
        Err(err) => {
            log::warn!("Failed to cast vote for issue {issue_id}: {err}");
            Err(err.into())
        }
    }
}

use super::prelude::*;

/// Cast a vote on behalf of `voter`.
///
/// The membership check against the caller's snapshot copy is a
/// fast path only: if the voter is already known to have voted, the
/// operation fails with [`Error::AlreadyVoted`] without contacting
/// the store. The authoritative gate is the store-side conditional
/// set-add of [`IssueUpdate::CastVote`], so two racing sessions of
/// the same voter still contribute at most one vote.
pub fn upvote_issue<R: IssueRepo>(repo: &R, issue: &Issue, voter: &UserId) -> Result<()> {
    if issue.has_voted(voter) {
        return Err(Error::AlreadyVoted);
    }
    repo.update_issue(
        issue.id.as_str(),
        IssueUpdate::CastVote {
            voter: voter.clone(),
        },
    )?;
    log::info!("Counted vote of {voter} for issue {}", issue.id);
    Ok(())
}

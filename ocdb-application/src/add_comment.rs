use ocdb_entities::{id::Id, user::UserId};

use crate::{usecases, IssueRepo, Result};

pub fn add_comment<R: IssueRepo>(
    store: &R,
    issue_id: &str,
    author: &UserId,
    text: &str,
) -> Result<Id> {
    let comment_id = usecases::add_comment(store, issue_id, author, text).map_err(|err| {
        log::warn!("Failed to add comment to issue {issue_id}: {err}");
        err
    })?;
    Ok(comment_id)
}

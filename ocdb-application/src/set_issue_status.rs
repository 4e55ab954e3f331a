use ocdb_entities::status::IssueStatus;

use crate::{usecases, IssueRepo, Result};

pub fn set_issue_status<R: IssueRepo>(
    store: &R,
    issue_id: &str,
    new_status: IssueStatus,
) -> Result<()> {
    usecases::set_issue_status(store, issue_id, new_status).map_err(|err| {
        log::warn!("Failed to change status of issue {issue_id}: {err}");
        err
    })?;
    Ok(())
}

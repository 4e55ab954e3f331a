use ocdb_entities::id::Id;

use crate::{usecases, IssueRepo, Result};

pub fn report_issue<R: IssueRepo>(store: &R, new_issue: usecases::NewIssue) -> Result<Id> {
    let id = usecases::report_issue(store, new_issue).map_err(|err| {
        log::warn!("Failed to report issue: {err}");
        err
    })?;
    Ok(id)
}

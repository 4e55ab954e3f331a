use super::prelude::*;

/// Set the workflow status of an issue.
///
/// Any transition is permitted, in any direction; the intended
/// progression reported → in-progress → resolved is a convention of
/// usage, not a rule the store enforces. No authorization is checked
/// at this layer.
pub fn set_issue_status<R: IssueRepo>(
    repo: &R,
    issue_id: &str,
    new_status: IssueStatus,
) -> Result<()> {
    log::info!("Changing status of issue {issue_id} to {new_status}");
    repo.update_issue(issue_id, IssueUpdate::SetStatus(new_status))?;
    Ok(())
}

use super::prelude::*;

pub fn load_issues<R: IssueRepo>(repo: &R) -> Result<Vec<Issue>> {
    Ok(repo.all_issues()?)
}

pub fn get_issue<R: IssueRepo>(repo: &R, id: &str) -> Result<Issue> {
    Ok(repo.get_issue(id)?)
}

/// Dashboard category filter. `None` is the "all" selection.
pub fn filter_issues_by_category(issues: Vec<Issue>, category: Option<Category>) -> Vec<Issue> {
    match category {
        None => issues,
        Some(category) => issues
            .into_iter()
            .filter(|issue| issue.category == category)
            .collect(),
    }
}

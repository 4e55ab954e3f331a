use super::prelude::*;

/// Append a comment to an issue.
///
/// Whitespace-only text is rejected before any store contact. The
/// comment is appended through the store's atomic array primitive,
/// so concurrent commenters never drop each other's entries; the
/// authoritative timestamp is assigned by the store.
pub fn add_comment<R: IssueRepo>(
    repo: &R,
    issue_id: &str,
    author: &UserId,
    text: &str,
) -> Result<Id> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    let comment = Comment {
        id: Id::new(),
        author: author.clone(),
        created_at: None,
        text: text.to_string(),
    };
    let comment_id = comment.id.clone();
    repo.update_issue(issue_id, IssueUpdate::AppendComment(comment))?;
    log::debug!("Appended comment {comment_id} to issue {issue_id}");
    Ok(comment_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{self, tests::MockRepo};

    #[test]
    fn append_in_call_order() {
        let repo = MockRepo::default();
        let id = repo.add_default_issue();
        usecases::add_comment(&repo, &id, &"u1".into(), "First!").unwrap();
        usecases::add_comment(&repo, &id, &"u2".into(), "Second").unwrap();
        let issue = repo.get_issue(&id).unwrap();
        assert_eq!(2, issue.comments.len());
        assert_eq!("First!", issue.comments[0].text);
        assert_eq!("Second", issue.comments[1].text);
        assert_eq!(UserId::from("u1"), issue.comments[0].author);
        assert_eq!(UserId::from("u2"), issue.comments[1].author);
    }

    #[test]
    fn trim_surrounding_whitespace() {
        let repo = MockRepo::default();
        let id = repo.add_default_issue();
        usecases::add_comment(&repo, &id, &"u1".into(), "  tidy  ").unwrap();
        assert_eq!("tidy", repo.get_issue(&id).unwrap().comments[0].text);
    }

    #[test]
    fn reject_whitespace_only_text() {
        let repo = MockRepo::default();
        let id = repo.add_default_issue();
        let writes_before = repo.update_count();
        let res = usecases::add_comment(&repo, &id, &"u1".into(), "   ");
        assert!(matches!(res, Err(Error::EmptyComment)));
        assert_eq!(writes_before, repo.update_count());
        assert!(repo.get_issue(&id).unwrap().comments.is_empty());
    }

    #[test]
    fn display_order_is_reversed_insertion_order() {
        let repo = MockRepo::default();
        let id = repo.add_default_issue();
        usecases::add_comment(&repo, &id, &"u1".into(), "older").unwrap();
        usecases::add_comment(&repo, &id, &"u1".into(), "newer").unwrap();
        let issue = repo.get_issue(&id).unwrap();
        let display: Vec<_> = issue.recent_comments().map(|c| c.text.as_str()).collect();
        assert_eq!(vec!["newer", "older"], display);
        // Underlying order is untouched.
        assert_eq!("older", issue.comments[0].text);
    }
}

use crate::{category::*, comment::*, geo::*, id::*, status::*, time::*, user::*};

/// A reported civic problem.
///
/// Issues are created once, mutated only through atomic field-level
/// updates (vote, comment, status) and never deleted. Every copy held
/// outside the store is a disposable read replica derived from the
/// latest snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: Id,
    pub category: Category,
    pub description: String,
    pub position: MapPoint,
    pub image_url: String,
    pub status: IssueStatus,
    pub votes: u64,
    // Set semantics: each user id appears at most once.
    pub voted_by: Vec<UserId>,
    // Insertion order is chronological.
    pub comments: Vec<Comment>,
    pub reported_by: UserId,
    // None until the store has confirmed the creation.
    pub created_at: Option<Timestamp>,
}

impl Issue {
    pub fn has_voted(&self, user: &UserId) -> bool {
        self.voted_by.iter().any(|voter| voter == user)
    }

    /// Comments in display order, most recent first.
    ///
    /// The underlying insertion order is preserved.
    pub fn recent_comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn voter_membership() {
        let issue = Issue::build().voted_by(&["u1", "u2"]).finish();
        assert!(issue.has_voted(&"u1".into()));
        assert!(issue.has_voted(&"u2".into()));
        assert!(!issue.has_voted(&"u3".into()));
    }
}

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, issue_builder::*};

pub mod issue_builder {

    use super::*;
    use crate::{category::*, comment::*, geo::*, id::*, issue::*, status::*, time::*};

    #[derive(Debug)]
    pub struct IssueBuild {
        issue: Issue,
    }

    impl IssueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.issue.id = id.into();
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.issue.category = category;
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.issue.description = description.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.issue.position = pos;
            self
        }
        pub fn status(mut self, status: IssueStatus) -> Self {
            self.issue.status = status;
            self
        }
        pub fn votes(mut self, votes: u64) -> Self {
            self.issue.votes = votes;
            self
        }
        pub fn voted_by(mut self, voters: &[&str]) -> Self {
            self.issue.voted_by = voters.iter().map(|v| (*v).into()).collect();
            self
        }
        pub fn comments(mut self, comments: Vec<Comment>) -> Self {
            self.issue.comments = comments;
            self
        }
        pub fn reported_by(mut self, user: &str) -> Self {
            self.issue.reported_by = user.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.issue.created_at = Some(at);
            self
        }
        pub fn finish(self) -> Issue {
            self.issue
        }
    }

    impl Builder for Issue {
        type Build = IssueBuild;
        fn build() -> IssueBuild {
            IssueBuild {
                issue: Issue {
                    id: Id::new(),
                    category: Category::Other,
                    description: "".into(),
                    position: MapPoint::default(),
                    image_url: "".into(),
                    status: IssueStatus::default(),
                    votes: 0,
                    voted_by: vec![],
                    comments: vec![],
                    reported_by: "".into(),
                    created_at: Some(Timestamp::now()),
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn author(mut self, author: &str) -> Self {
            self.comment.author = author.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.comment.created_at = Some(at);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    author: "".into(),
                    created_at: Some(Timestamp::now()),
                    text: "".into(),
                },
            }
        }
    }
}

mod add_comment;
mod error;
mod load_issues;
mod report_issue;
mod set_issue_status;
mod upvote_issue;


pub use self::{
    add_comment::*, error::Error, load_issues::*, report_issue::*, set_issue_status::*,
    upvote_issue::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{
            category::*, comment::*, geo::*, id::*, issue::*, status::*, time::*, user::*,
        },
        repositories::*,
    };
}

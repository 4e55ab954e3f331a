use ocdb_db_mem::MemoryStore;

use ocdb_entities::{category::Category, status::IssueStatus, user::UserId};

use crate::{prelude as flows, prelude::VoteOutcome, usecases};

struct BackendFixture {
    store: MemoryStore,
    current_user: UserId,
}

impl BackendFixture {
    fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            current_user: "session-user".into(),
        }
    }

    fn report_default_issue(&self) -> String {
        flows::report_issue(
            &self.store,
            usecases::NewIssue {
                category: Category::Pothole,
                description: "Deep pothole on Elm Street".into(),
                lat: 48.137,
                lng: 11.575,
                image_url: None,
                reported_by: self.current_user.clone(),
            },
        )
        .unwrap()
        .into()
    }
}

#[test]
fn report_vote_comment_resolve() {
    let fixture = BackendFixture::new();
    let feed = flows::LiveFeed::subscribe(&fixture.store);

    let id = fixture.report_default_issue();

    let outcome = flows::upvote_issue(&fixture.store, &id, &"neighbor".into()).unwrap();
    assert_eq!(VoteOutcome::Counted, outcome);
    let outcome = flows::upvote_issue(&fixture.store, &id, &"neighbor".into()).unwrap();
    assert_eq!(VoteOutcome::AlreadyVoted, outcome);

    flows::add_comment(&fixture.store, &id, &"neighbor".into(), "Nearly lost a wheel").unwrap();
    flows::set_issue_status(&fixture.store, &id, IssueStatus::Resolved).unwrap();

    let state = feed.current();
    assert_eq!(1, state.stats.total);
    assert_eq!(1, state.stats.status_count(IssueStatus::Resolved));
    assert_eq!(1, state.stats.category_count(Category::Pothole));
    let issue = &state.issues[0];
    assert_eq!(1, issue.votes);
    assert_eq!(1, issue.comments.len());
    assert_eq!(IssueStatus::Resolved, issue.status);
}

#[test]
fn rejected_write_leaves_feed_untouched() {
    let fixture = BackendFixture::new();
    let id = fixture.report_default_issue();
    let feed = flows::LiveFeed::subscribe(&fixture.store);
    let before = feed.current();

    let res = flows::add_comment(&fixture.store, &id, &"neighbor".into(), "   ");
    assert!(res.is_err());
    let res = flows::set_issue_status(&fixture.store, "unknown-issue", IssueStatus::Resolved);
    assert!(res.is_err());

    let after = feed.current();
    assert_eq!(before.issues, after.issues);
    assert_eq!(before.stats, after.stats);
}

#[test]
fn status_may_move_backwards() {
    let fixture = BackendFixture::new();
    let id = fixture.report_default_issue();
    flows::set_issue_status(&fixture.store, &id, IssueStatus::Resolved).unwrap();
    flows::set_issue_status(&fixture.store, &id, IssueStatus::Reported).unwrap();
    let issue = usecases::get_issue(&fixture.store, &id).unwrap();
    assert_eq!(IssueStatus::Reported, issue.status);
}

#[test]
fn dropped_feed_releases_its_subscription() {
    let fixture = BackendFixture::new();
    let feed = flows::LiveFeed::subscribe(&fixture.store);
    drop(feed);
    // Mutations after the drop no longer reach the released listener.
    fixture.report_default_issue();
    let feed = flows::LiveFeed::subscribe(&fixture.store);
    assert_eq!(1, feed.current().stats.total);
}

use std::sync::Arc;

use parking_lot::RwLock;

use ocdb_core::stats::IssueStats;
use ocdb_entities::issue::Issue;

use crate::{CollectionEvent, IssueSubscriptions, Subscription};

/// View state derived from the latest collection snapshot.
///
/// The state is never patched in place: every pushed event replaces
/// it wholesale through the pure [`FeedState::apply`] reducer.
#[derive(Debug, Default, Clone)]
pub struct FeedState {
    pub issues: Vec<Issue>,
    pub stats: IssueStats,
    /// Set while the subscription is failing; the previous issue list
    /// is kept so the view can keep rendering stale data alongside
    /// the error.
    pub last_error: Option<String>,
}

impl FeedState {
    pub fn apply(self, event: CollectionEvent) -> Self {
        match event {
            CollectionEvent::Snapshot(issues) => {
                let stats = IssueStats::from_snapshot(&issues);
                Self {
                    issues,
                    stats,
                    last_error: None,
                }
            }
            CollectionEvent::Error(err) => Self {
                last_error: Some(err.to_string()),
                ..self
            },
        }
    }
}

/// Live read model of the issue collection.
///
/// Holds the subscription for its whole lifetime and releases it on
/// drop, so a discarded feed stops consuming events immediately.
#[derive(Debug)]
pub struct LiveFeed {
    state: Arc<RwLock<FeedState>>,
    _subscription: Subscription,
}

impl LiveFeed {
    pub fn subscribe<S: IssueSubscriptions>(store: &S) -> Self {
        let state = Arc::new(RwLock::new(FeedState::default()));
        let sink = Arc::clone(&state);
        let subscription = store.subscribe_issues(Box::new(move |event| {
            let mut state = sink.write();
            *state = state.clone().apply(event);
        }));
        Self {
            state,
            _subscription: subscription,
        }
    }

    pub fn current(&self) -> FeedState {
        self.state.read().clone()
    }
}

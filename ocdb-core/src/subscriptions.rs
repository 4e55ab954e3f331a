// Push-based snapshot subscriptions.
//
// The store delivers the full current state of the watched scope on
// every change, starting with an initial snapshot at subscribe time.
// Consumers never poll and never patch snapshots incrementally.

use std::fmt;

use thiserror::Error;

use crate::entities::issue::Issue;

#[derive(Debug, Clone, Error)]
pub enum SubscriptionError {
    #[error("The watched document does not exist")]
    Gone,
    #[error("Store error: {0}")]
    Store(String),
}

/// Pushed to a collection listener on every change to the issue
/// collection. The contained snapshot is complete and unordered.
#[derive(Debug, Clone)]
pub enum CollectionEvent {
    Snapshot(Vec<Issue>),
    Error(SubscriptionError),
}

/// Pushed to a document listener on every change to the watched issue.
#[derive(Debug, Clone)]
pub enum DocumentEvent {
    Snapshot(Issue),
    Error(SubscriptionError),
}

pub type CollectionListener = Box<dyn Fn(CollectionEvent) + Send + Sync>;
pub type DocumentListener = Box<dyn Fn(DocumentEvent) + Send + Sync>;

pub trait IssueSubscriptions {
    /// Watch the whole issue collection. The listener receives an
    /// initial snapshot immediately.
    fn subscribe_issues(&self, listener: CollectionListener) -> Subscription;

    /// Watch a single issue document. The listener receives an initial
    /// snapshot immediately, or [`SubscriptionError::Gone`] if the
    /// document does not exist.
    fn subscribe_issue(&self, id: &str, listener: DocumentListener) -> Subscription;
}

/// Handle of an active subscription.
///
/// Dropping the handle releases the underlying listener registration.
/// A handle that is kept alive after its consumer is gone is a
/// resource leak: the store keeps delivering events indefinitely.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the subscription explicitly.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

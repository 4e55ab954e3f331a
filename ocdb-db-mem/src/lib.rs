//! # ocdb-db-mem
//!
//! In-memory issue store with push-based snapshot delivery.
//!
//! Documents live in a single guarded map. Every mutation is applied
//! under the write lock through the atomic field primitives of the
//! store contract, then the full current snapshot is pushed to all
//! registered listeners. The collection can be loaded from and dumped
//! to a JSON file of boundary documents.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;

use ocdb_core::{
    entities::{id::Id, issue::Issue, time::Timestamp},
    repositories::{IssueRepo, IssueUpdate, NewIssueRecord},
    subscriptions::{
        CollectionEvent, CollectionListener, DocumentEvent, DocumentListener, IssueSubscriptions,
        Subscription, SubscriptionError,
    },
    RepoError,
};

mod persist;

type Result<T> = std::result::Result<T, RepoError>;

struct CollectionEntry {
    id: u64,
    listener: CollectionListener,
}

struct DocumentEntry {
    id: u64,
    issue_id: String,
    listener: DocumentListener,
}

#[derive(Default)]
struct Listeners {
    collection: Vec<Arc<CollectionEntry>>,
    document: Vec<Arc<DocumentEntry>>,
}

#[derive(Default)]
struct Inner {
    issues: RwLock<HashMap<String, Issue>>,
    listeners: Mutex<Listeners>,
    next_listener_id: AtomicU64,
}

/// Shared handle to the store. Cloning is cheap and all clones
/// operate on the same collection.
#[derive(Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full current snapshot, ordered by creation time with ties
    /// broken by id. Consumers must not rely on this order; the store
    /// contract leaves collection order unspecified.
    fn snapshot(&self) -> Vec<Issue> {
        let mut issues: Vec<_> = self.inner.issues.read().values().cloned().collect();
        issues.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        issues
    }

    fn next_listener_id(&self) -> u64 {
        self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed)
    }

    // Listeners are invoked outside both locks so that a callback may
    // itself read from the store.
    fn notify(&self, changed_id: &str) {
        let snapshot = self.snapshot();
        let changed = self.inner.issues.read().get(changed_id).cloned();
        let (collection, document) = {
            let listeners = self.inner.listeners.lock();
            (listeners.collection.clone(), listeners.document.clone())
        };
        for entry in &collection {
            (entry.listener)(CollectionEvent::Snapshot(snapshot.clone()));
        }
        if let Some(issue) = changed {
            for entry in document.iter().filter(|e| e.issue_id == changed_id) {
                (entry.listener)(DocumentEvent::Snapshot(issue.clone()));
            }
        }
    }
}

impl IssueRepo for MemoryStore {
    fn create_issue(&self, new_issue: NewIssueRecord) -> Result<Id> {
        let NewIssueRecord {
            category,
            description,
            position,
            image_url,
            status,
            reported_by,
        } = new_issue;
        let id = Id::new();
        let issue = Issue {
            id: id.clone(),
            category,
            description,
            position,
            image_url,
            status,
            votes: 0,
            voted_by: vec![],
            comments: vec![],
            reported_by,
            created_at: Some(Timestamp::now()),
        };
        self.inner.issues.write().insert(id.to_string(), issue);
        self.notify(id.as_str());
        Ok(id)
    }

    fn get_issue(&self, id: &str) -> Result<Issue> {
        self.inner
            .issues
            .read()
            .get(id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_issues(&self) -> Result<Vec<Issue>> {
        Ok(self.snapshot())
    }

    fn count_issues(&self) -> Result<usize> {
        Ok(self.inner.issues.read().len())
    }

    fn update_issue(&self, id: &str, update: IssueUpdate) -> Result<()> {
        {
            let mut issues = self.inner.issues.write();
            let issue = issues.get_mut(id).ok_or(RepoError::NotFound)?;
            match update {
                IssueUpdate::CastVote { voter } => {
                    // Conditional set-add: membership is the
                    // authoritative gate, a duplicate is a no-op.
                    if !issue.has_voted(&voter) {
                        issue.voted_by.push(voter);
                        issue.votes += 1;
                    }
                }
                IssueUpdate::AppendComment(mut comment) => {
                    comment.created_at = Some(Timestamp::now());
                    issue.comments.push(comment);
                }
                IssueUpdate::SetStatus(status) => {
                    issue.status = status;
                }
            }
        }
        self.notify(id);
        Ok(())
    }
}

impl IssueSubscriptions for MemoryStore {
    fn subscribe_issues(&self, listener: CollectionListener) -> Subscription {
        let entry = Arc::new(CollectionEntry {
            id: self.next_listener_id(),
            listener,
        });
        self.inner.listeners.lock().collection.push(Arc::clone(&entry));
        (entry.listener)(CollectionEvent::Snapshot(self.snapshot()));
        let inner = Arc::downgrade(&self.inner);
        let id = entry.id;
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.lock().collection.retain(|e| e.id != id);
            }
        })
    }

    fn subscribe_issue(&self, issue_id: &str, listener: DocumentListener) -> Subscription {
        let entry = Arc::new(DocumentEntry {
            id: self.next_listener_id(),
            issue_id: issue_id.to_string(),
            listener,
        });
        self.inner.listeners.lock().document.push(Arc::clone(&entry));
        match self.get_issue(issue_id) {
            Ok(issue) => (entry.listener)(DocumentEvent::Snapshot(issue)),
            Err(_) => (entry.listener)(DocumentEvent::Error(SubscriptionError::Gone)),
        }
        let inner = Arc::downgrade(&self.inner);
        let id = entry.id;
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.lock().document.retain(|e| e.id != id);
            }
        })
    }
}

use super::*;
use ocdb_entities as e;

use e::{category::Category, geo::MapPoint, status::IssueStatus, time::Timestamp};

impl From<e::comment::Comment> for CommentDoc {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            author,
            created_at,
            text,
        } = from;
        Self {
            id: id.into(),
            user_id: author.into(),
            text,
            created_at: created_at.map(Timestamp::into_milliseconds),
        }
    }
}

impl From<CommentDoc> for e::comment::Comment {
    fn from(from: CommentDoc) -> Self {
        let CommentDoc {
            id,
            user_id,
            text,
            created_at,
        } = from;
        Self {
            id: id.into(),
            author: user_id.into(),
            created_at: created_at.map(Timestamp::from_milliseconds),
            text,
        }
    }
}

impl From<e::issue::Issue> for IssueDoc {
    fn from(from: e::issue::Issue) -> Self {
        let e::issue::Issue {
            id,
            category,
            description,
            position,
            image_url,
            status,
            votes,
            voted_by,
            comments,
            reported_by,
            created_at,
        } = from;
        Self {
            id: id.into(),
            category: Some(category.to_string()),
            description,
            lat: position.lat_deg(),
            lng: position.lng_deg(),
            image_url: Some(image_url),
            status: Some(status.to_string()),
            votes,
            voted_by: voted_by.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
            reported_by: Some(reported_by.into()),
            created_at: created_at.map(Timestamp::into_milliseconds),
        }
    }
}

// Lossy by design: documents written by older clients may lack fields
// or carry unrecognized enum values. Anything unknown maps onto the
// documented defaults instead of failing the whole snapshot.
impl From<IssueDoc> for e::issue::Issue {
    fn from(from: IssueDoc) -> Self {
        let IssueDoc {
            id,
            category,
            description,
            lat,
            lng,
            image_url,
            status,
            votes,
            voted_by,
            comments,
            reported_by,
            created_at,
        } = from;
        let category = category
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(Category::fallback());
        let status = status
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(IssueStatus::default());
        let position = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap_or_default();
        Self {
            id: id.into(),
            category,
            description,
            position,
            image_url: image_url.unwrap_or_default(),
            status,
            votes,
            voted_by: voted_by.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
            reported_by: reported_by.unwrap_or_default().into(),
            created_at: created_at.map(Timestamp::from_milliseconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_maps_onto_defaults() {
        let json = r#"{
            "id": "abc123",
            "lat": 48.1,
            "lng": 11.5
        }"#;
        let doc: IssueDoc = serde_json::from_str(json).unwrap();
        let issue = e::issue::Issue::from(doc);
        assert_eq!("abc123", issue.id.as_str());
        assert_eq!(Category::Other, issue.category);
        assert_eq!(IssueStatus::Reported, issue.status);
        assert_eq!(0, issue.votes);
        assert!(issue.voted_by.is_empty());
        assert!(issue.comments.is_empty());
        assert!(issue.created_at.is_none());
    }

    #[test]
    fn unknown_enum_values_map_onto_fallbacks() {
        let json = r#"{
            "id": "abc123",
            "category": "street-art",
            "status": "wontfix",
            "lat": 0.0,
            "lng": 0.0
        }"#;
        let doc: IssueDoc = serde_json::from_str(json).unwrap();
        let issue = e::issue::Issue::from(doc);
        assert_eq!(Category::Other, issue.category);
        assert_eq!(IssueStatus::Reported, issue.status);
    }

    #[test]
    fn full_document_round_trip() {
        let json = r#"{
            "id": "abc123",
            "category": "garbage-dump",
            "description": "Overflowing bins",
            "lat": 48.1,
            "lng": 11.5,
            "imageUrl": "https://example.org/img.jpg",
            "status": "in-progress",
            "votes": 2,
            "votedBy": ["u1", "u2"],
            "comments": [
                { "id": "c1", "userId": "u1", "text": "Still there", "createdAt": 1700000000000 }
            ],
            "reportedBy": "u1",
            "createdAt": 1690000000000
        }"#;
        let doc: IssueDoc = serde_json::from_str(json).unwrap();
        let issue = e::issue::Issue::from(doc.clone());
        assert_eq!(Category::GarbageDump, issue.category);
        assert_eq!(IssueStatus::InProgress, issue.status);
        assert_eq!(2, issue.votes);
        assert_eq!(1, issue.comments.len());
        assert_eq!(doc, IssueDoc::from(issue));
    }
}

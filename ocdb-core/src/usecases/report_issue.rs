use super::prelude::*;

/// Stand-in image reference until real uploads are supported.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400/cyan/black?text=Issue+Image";

/// Parameters collected by the report submission form.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub category: Category,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub image_url: Option<String>,
    pub reported_by: UserId,
}

pub fn report_issue<R: IssueRepo>(repo: &R, new_issue: NewIssue) -> Result<Id> {
    let NewIssue {
        category,
        description,
        lat,
        lng,
        image_url,
        reported_by,
    } = new_issue;
    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }
    let position = MapPoint::try_from_lat_lng_deg(lat, lng)?;
    let record = NewIssueRecord {
        category,
        description,
        position,
        image_url: image_url.unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
        status: IssueStatus::default(),
        reported_by,
    };
    let id = repo.create_issue(record)?;
    log::info!("Reported new {category} issue {id}");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{self, tests::MockRepo};

    fn new_issue(description: &str) -> NewIssue {
        NewIssue {
            category: Category::Pothole,
            description: description.to_string(),
            lat: 48.1,
            lng: 11.5,
            image_url: None,
            reported_by: "u1".into(),
        }
    }

    #[test]
    fn initialize_created_issue() {
        let repo = MockRepo::default();
        let id = usecases::report_issue(&repo, new_issue("Deep pothole")).unwrap();
        let issue = repo.get_issue(id.as_str()).unwrap();
        assert_eq!(IssueStatus::Reported, issue.status);
        assert_eq!(0, issue.votes);
        assert!(issue.voted_by.is_empty());
        assert!(issue.comments.is_empty());
        assert_eq!(PLACEHOLDER_IMAGE_URL, issue.image_url);
        assert!(issue.created_at.is_some());
    }

    #[test]
    fn reject_empty_description() {
        let repo = MockRepo::default();
        let res = usecases::report_issue(&repo, new_issue("   "));
        assert!(matches!(res, Err(Error::EmptyDescription)));
        assert_eq!(0, repo.count_issues().unwrap());
    }

    #[test]
    fn reject_position_out_of_range() {
        let repo = MockRepo::default();
        let mut issue = new_issue("Deep pothole");
        issue.lat = 91.0;
        let res = usecases::report_issue(&repo, issue);
        assert!(matches!(res, Err(Error::InvalidPosition)));
    }
}

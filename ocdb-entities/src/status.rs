use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub type IssueStatusPrimitive = i16;

/// Workflow status of a reported issue.
///
/// The workflow is intentionally permissive: any transition between
/// any two statuses is allowed, in any direction.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum IssueStatus {
    Reported   = 0,
    InProgress = 1,
    Resolved   = 2,
}

impl IssueStatus {
    /// Status assigned to freshly reported issues, and the fallback
    /// for documents with a missing or unrecognized status value.
    pub const fn default() -> Self {
        Self::Reported
    }

    pub fn is_open(self) -> bool {
        self != Self::Resolved
    }
}

#[derive(Debug, Error)]
#[error("Invalid issue status primitive: {0}")]
pub struct InvalidIssueStatusPrimitive(IssueStatusPrimitive);

impl TryFrom<IssueStatusPrimitive> for IssueStatus {
    type Error = InvalidIssueStatusPrimitive;
    fn try_from(from: IssueStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidIssueStatusPrimitive(from))
    }
}

impl From<IssueStatus> for IssueStatusPrimitive {
    fn from(from: IssueStatus) -> Self {
        from.to_i16().expect("Issue status primitive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kebab_case_values() {
        assert_eq!(Ok(IssueStatus::Reported), "reported".parse());
        assert_eq!(Ok(IssueStatus::InProgress), "in-progress".parse());
        assert_eq!(Ok(IssueStatus::Resolved), "resolved".parse());
        assert!("closed".parse::<IssueStatus>().is_err());
    }

    #[test]
    fn convert_from_into_primitive() {
        for status in [
            IssueStatus::Reported,
            IssueStatus::InProgress,
            IssueStatus::Resolved,
        ] {
            let primitive = <IssueStatusPrimitive as From<IssueStatus>>::from(status);
            assert_eq!(Ok(status), IssueStatus::try_from(primitive).map_err(|_| ()));
        }
        assert!(IssueStatus::try_from(3).is_err());
    }
}

use strum::IntoEnumIterator;

use crate::entities::{category::Category, issue::Issue, status::IssueStatus};

/// Derived counts over one collection snapshot.
///
/// Recomputed in full from every snapshot delivery; there is no
/// incremental update and no hidden state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueStats {
    pub total: usize,
    /// One entry per status, in declaration order, zero counts included.
    pub by_status: Vec<(IssueStatus, usize)>,
    /// One entry per category, in declaration order, zero counts included.
    pub by_category: Vec<(Category, usize)>,
    /// max(1, largest status count). The floor of 1 exists solely to
    /// avoid division by zero when rendering proportional bars.
    pub max_status: usize,
    /// max(1, largest category count), same floor.
    pub max_category: usize,
}

impl IssueStats {
    pub fn from_snapshot(issues: &[Issue]) -> Self {
        issues
            .iter()
            .fold(IssueStatsBuilder::default(), |mut acc, issue| {
                acc.add(issue.status, issue.category);
                acc
            })
            .build()
    }

    pub fn status_count(&self, status: IssueStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.by_category
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

impl Default for IssueStats {
    fn default() -> Self {
        Self::from_snapshot(&[])
    }
}

#[derive(Debug, Default)]
pub struct IssueStatsBuilder {
    total: usize,
    status_counts: Vec<(IssueStatus, usize)>,
    category_counts: Vec<(Category, usize)>,
}

impl IssueStatsBuilder {
    pub fn add(&mut self, status: IssueStatus, category: Category) {
        self.total += 1;
        bump(&mut self.status_counts, status);
        bump(&mut self.category_counts, category);
    }

    pub fn build(self) -> IssueStats {
        let Self {
            total,
            status_counts,
            category_counts,
        } = self;
        let by_status: Vec<_> = IssueStatus::iter()
            .map(|status| (status, count_of(&status_counts, status)))
            .collect();
        let by_category: Vec<_> = Category::iter()
            .map(|category| (category, count_of(&category_counts, category)))
            .collect();
        let max_status = scaling_max(&by_status);
        let max_category = scaling_max(&by_category);
        IssueStats {
            total,
            by_status,
            by_category,
            max_status,
            max_category,
        }
    }
}

fn bump<T: PartialEq>(counts: &mut Vec<(T, usize)>, key: T) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, count)) => *count += 1,
        None => counts.push((key, 1)),
    }
}

fn count_of<T: PartialEq>(counts: &[(T, usize)], key: T) -> usize {
    counts
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, count)| *count)
        .unwrap_or(0)
}

fn scaling_max<T>(counts: &[(T, usize)]) -> usize {
    counts.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::builders::*;

    fn new_issue(category: Category, status: IssueStatus) -> Issue {
        Issue::build().category(category).status(status).finish()
    }

    #[test]
    fn empty_snapshot() {
        let stats = IssueStats::from_snapshot(&[]);
        assert_eq!(0, stats.total);
        assert!(stats.by_status.iter().all(|(_, count)| *count == 0));
        assert!(stats.by_category.iter().all(|(_, count)| *count == 0));
        assert_eq!(1, stats.max_status);
        assert_eq!(1, stats.max_category);
        assert_eq!(stats, IssueStats::default());
    }

    #[test]
    fn counts_partition_the_snapshot() {
        let issues = [
            new_issue(Category::Pothole, IssueStatus::Reported),
            new_issue(Category::Pothole, IssueStatus::Reported),
            new_issue(Category::GarbageDump, IssueStatus::Resolved),
        ];
        let stats = IssueStats::from_snapshot(&issues);
        assert_eq!(3, stats.total);
        let status_sum: usize = stats.by_status.iter().map(|(_, count)| count).sum();
        let category_sum: usize = stats.by_category.iter().map(|(_, count)| count).sum();
        assert_eq!(3, status_sum);
        assert_eq!(3, category_sum);
    }

    #[test]
    fn three_issue_scenario() {
        let issues = [
            new_issue(Category::Pothole, IssueStatus::Reported),
            new_issue(Category::Pothole, IssueStatus::Reported),
            new_issue(Category::GarbageDump, IssueStatus::Resolved),
        ];
        let stats = IssueStats::from_snapshot(&issues);
        assert_eq!(3, stats.total);
        assert_eq!(2, stats.status_count(IssueStatus::Reported));
        assert_eq!(0, stats.status_count(IssueStatus::InProgress));
        assert_eq!(1, stats.status_count(IssueStatus::Resolved));
        assert_eq!(2, stats.category_count(Category::Pothole));
        assert_eq!(1, stats.category_count(Category::GarbageDump));
        assert_eq!(0, stats.category_count(Category::Other));
        assert_eq!(2, stats.max_status);
        assert_eq!(2, stats.max_category);
    }

    #[test]
    fn every_category_has_a_bucket() {
        let stats = IssueStats::from_snapshot(&[new_issue(
            Category::WaterLeakage,
            IssueStatus::InProgress,
        )]);
        assert_eq!(Category::iter().count(), stats.by_category.len());
        assert_eq!(IssueStatus::iter().count(), stats.by_status.len());
    }
}

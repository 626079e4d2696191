//! Models backing the admin dashboard.
//!
//! Everything here is decorative mock data: the admin panels render static
//! records and their action handlers only log intent, they never mutate or
//! persist anything.

use serde::{Deserialize, Serialize};

/// Publication state of an admin-managed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentStatus {
    Published,
    Draft,
    UnderReview,
}

impl ContentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Published => "Published",
            ContentStatus::Draft => "Draft",
            ContentStatus::UnderReview => "Under Review",
        }
    }
}

/// Filter applied to the content library list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFilter {
    #[default]
    All,
    Status(ContentStatus),
}

impl ContentFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ContentFilter::All => "All Content",
            ContentFilter::Status(ContentStatus::Published) => "Published",
            ContentFilter::Status(ContentStatus::Draft) => "Drafts",
            ContentFilter::Status(ContentStatus::UnderReview) => "Under Review",
        }
    }

    pub fn matches(&self, status: ContentStatus) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::Status(wanted) => *wanted == status,
        }
    }
}

/// A content-library record shown in the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentItem {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub status: ContentStatus,
    pub views: u32,
    pub author: &'static str,
    pub last_modified: &'static str,
    pub scheduled: Option<&'static str>,
    pub featured: bool,
}

/// Returns only the items matching the selected status filter.
pub fn filter_by_status(items: &[ContentItem], filter: ContentFilter) -> Vec<ContentItem> {
    items
        .iter()
        .copied()
        .filter(|item| filter.matches(item.status))
        .collect()
}

/// Pre-built authoring template shown in the template gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTemplate {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::High => "High",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Active => "Active",
            AlertStatus::Resolved => "Resolved",
        }
    }
}

/// A crisis-keyword detection shown in the review queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrisisAlert {
    pub id: u32,
    pub timestamp: &'static str,
    pub severity: AlertSeverity,
    pub keywords: &'static [&'static str],
    pub status: AlertStatus,
}

/// One day of the mock mood-trends analytics chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodTrendPoint {
    pub date: &'static str,
    pub happy: u32,
    pub neutral: u32,
    pub sad: u32,
}

/// One slice of the mock risk-distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskBucket {
    pub category: &'static str,
    pub count: u32,
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Vec<ContentItem> {
        vec![
            ContentItem {
                id: 1,
                title: "Understanding Depression",
                category: "Mental Health",
                status: ContentStatus::Published,
                views: 1234,
                author: "Dr. Smith",
                last_modified: "2024-01-07",
                scheduled: None,
                featured: true,
            },
            ContentItem {
                id: 2,
                title: "Anxiety Coping Strategies",
                category: "Self-Help",
                status: ContentStatus::Draft,
                views: 0,
                author: "Sarah Johnson",
                last_modified: "2024-01-06",
                scheduled: Some("2024-01-10"),
                featured: false,
            },
            ContentItem {
                id: 3,
                title: "Mindfulness Meditation Guide",
                category: "Wellness",
                status: ContentStatus::UnderReview,
                views: 0,
                author: "Dr. Chen",
                last_modified: "2024-01-04",
                scheduled: None,
                featured: false,
            },
        ]
    }

    #[test]
    fn all_filter_passes_everything() {
        assert_eq!(filter_by_status(&library(), ContentFilter::All).len(), 3);
    }

    #[test]
    fn status_filter_shows_only_matching_items() {
        let filtered = filter_by_status(
            &library(),
            ContentFilter::Status(ContentStatus::UnderReview),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
        assert!(filtered
            .iter()
            .all(|item| item.status == ContentStatus::UnderReview));
    }

    #[test]
    fn draft_filter_excludes_published() {
        let filtered = filter_by_status(&library(), ContentFilter::Status(ContentStatus::Draft));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Anxiety Coping Strategies");
    }
}

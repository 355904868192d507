//! Aggregate figures for the analytics and review views.

use serde::Serialize;

use crate::models::{Application, ApplicationStatus, Review, Role, ScholarshipRecord, UserProfile};

const UNCATEGORIZED: &str = "Uncategorized";

/// Aggregate figures over a scholarship collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    /// Records with no application fee
    pub free_count: usize,
    pub total_application_fees: f64,
    /// Sum of tuition fees; missing values count as zero
    pub total_tuition_fees: f64,
    /// Records per category, in first-seen order
    pub category_counts: Vec<(String, usize)>,
}

impl CatalogStats {
    pub fn from_records(records: &[ScholarshipRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            let fee = record.fee();
            if fee <= 0.0 {
                stats.free_count += 1;
            }
            stats.total_application_fees += fee;
            stats.total_tuition_fees += record.tuition_fees.unwrap_or(0.0);

            let category = if record.category.trim().is_empty() {
                UNCATEGORIZED
            } else {
                record.category.as_str()
            };
            match stats
                .category_counts
                .iter_mut()
                .find(|(name, _)| name.as_str() == category)
            {
                Some((_, count)) => *count += 1,
                None => stats.category_counts.push((category.to_string(), 1)),
            }
        }

        stats
    }

    /// Mean application fee, or zero for an empty collection.
    pub fn average_fee(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.total_application_fees / self.total as f64
        }
    }
}

/// Mean rating of `reviews`, or zero when there are none.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    reviews.iter().map(Review::rating).sum::<f64>() / reviews.len() as f64
}

pub fn five_star_count(reviews: &[Review]) -> usize {
    reviews.iter().filter(|r| r.is_five_star()).count()
}

/// Rating figures for a set of reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub count: usize,
    pub average_rating: f64,
    pub five_star_count: usize,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self {
            count: reviews.len(),
            average_rating: average_rating(reviews),
            five_star_count: five_star_count(reviews),
        }
    }
}

/// Applications per processing stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationStatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub rejected: usize,
}

impl ApplicationStatusCounts {
    pub fn from_applications(applications: &[Application]) -> Self {
        let mut counts = Self::default();
        for application in applications {
            match application.status {
                ApplicationStatus::Pending => counts.pending += 1,
                ApplicationStatus::Processing => counts.processing += 1,
                ApplicationStatus::Completed => counts.completed += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }
}

/// Users per marketplace role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub admin: usize,
    pub moderator: usize,
    pub student: usize,
}

impl RoleCounts {
    pub fn from_users(users: &[UserProfile]) -> Self {
        let mut counts = Self::default();
        for user in users {
            match user.role {
                Role::Admin => counts.admin += 1,
                Role::Moderator => counts.moderator += 1,
                Role::Student => counts.student += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, fee: Option<f64>) -> ScholarshipRecord {
        ScholarshipRecord {
            category: category.to_string(),
            application_fee: fee,
            ..ScholarshipRecord::default()
        }
    }

    fn review(rating: Option<f64>) -> Review {
        Review {
            rating,
            ..Review::default()
        }
    }

    fn application(status: &str) -> Application {
        Application {
            status: ApplicationStatus::from_label(status),
            ..Application::default()
        }
    }

    fn user(role: &str) -> UserProfile {
        UserProfile {
            role: Role::from_label(role),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_counts_and_fees() {
        let records = vec![
            record("Full fund", Some(100.0)),
            record("Partial", None),
            record("Full fund", Some(50.0)),
            record("", Some(0.0)),
        ];
        let stats = CatalogStats::from_records(&records);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.free_count, 2);
        assert_eq!(stats.total_application_fees, 150.0);
        assert_eq!(stats.total_tuition_fees, 0.0);
        assert_eq!(stats.average_fee(), 37.5);
        assert_eq!(
            stats.category_counts,
            vec![
                ("Full fund".to_string(), 2),
                ("Partial".to_string(), 1),
                ("Uncategorized".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty() {
        let stats = CatalogStats::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_fee(), 0.0);
        assert_eq!(stats.total_tuition_fees, 0.0);
        assert!(stats.category_counts.is_empty());
    }

    #[test]
    fn test_tuition_total_is_separate_from_application_fees() {
        let records = vec![
            ScholarshipRecord {
                tuition_fees: Some(12000.0),
                application_fee: Some(50.0),
                ..ScholarshipRecord::default()
            },
            ScholarshipRecord {
                tuition_fees: Some(8000.5),
                ..ScholarshipRecord::default()
            },
            record("Partial", Some(25.0)),
        ];
        let stats = CatalogStats::from_records(&records);
        assert_eq!(stats.total_tuition_fees, 20000.5);
        assert_eq!(stats.total_application_fees, 75.0);
    }

    #[test]
    fn test_review_summary() {
        let reviews = vec![
            review(Some(5.0)),
            review(Some(4.0)),
            review(Some(5.0)),
            review(None),
        ];
        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.average_rating, 3.5);
        assert_eq!(summary.five_star_count, 2);
    }

    #[test]
    fn test_review_summary_without_reviews() {
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(five_star_count(&[]), 0);
        assert_eq!(ReviewSummary::from_reviews(&[]), ReviewSummary::default());
    }

    #[test]
    fn test_application_status_counts() {
        let applications = vec![
            application("pending"),
            application("processing"),
            application("completed"),
            application("Completed"),
            application("rejected"),
            application(""),
        ];
        let counts = ApplicationStatusCounts::from_applications(&applications);
        assert_eq!(
            counts,
            ApplicationStatusCounts {
                pending: 2,
                processing: 1,
                completed: 2,
                rejected: 1,
            }
        );
        assert_eq!(
            ApplicationStatusCounts::from_applications(&[]),
            ApplicationStatusCounts::default()
        );
    }

    #[test]
    fn test_role_counts() {
        let users = vec![user("admin"), user("moderator"), user("student"), user("guest")];
        let counts = RoleCounts::from_users(&users);
        assert_eq!(
            counts,
            RoleCounts {
                admin: 1,
                moderator: 1,
                student: 2,
            }
        );
        assert_eq!(RoleCounts::from_users(&[]), RoleCounts::default());
    }
}

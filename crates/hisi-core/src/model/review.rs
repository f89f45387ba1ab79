// ── Customer reviews ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use hisi_api::types::ReviewUpdate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub id: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub author: String,
    pub product: Option<String>,
    pub approved: bool,
    pub featured: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    /// `★★★★☆` for a four-star review.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total_reviews: u64,
    /// Rounded to one decimal by the backend.
    pub average_rating: f64,
    /// Review counts for 1 through 5 stars.
    pub distribution: [u64; 5],
}

/// Moderation queue filter.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    All,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// One moderation step on a review.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReviewAction {
    Approve,
    /// Withdraw approval; the review goes back to the queue.
    Reject,
    Feature,
    Unfeature,
}

impl ReviewAction {
    pub fn to_update(self) -> ReviewUpdate {
        match self {
            Self::Approve => ReviewUpdate {
                is_approved: Some(true),
                ..ReviewUpdate::default()
            },
            Self::Reject => ReviewUpdate {
                is_approved: Some(false),
                ..ReviewUpdate::default()
            },
            Self::Feature => ReviewUpdate {
                is_featured: Some(true),
                ..ReviewUpdate::default()
            },
            Self::Unfeature => ReviewUpdate {
                is_featured: Some(false),
                ..ReviewUpdate::default()
            },
        }
    }

    /// Past-tense label for notices.
    pub fn done_label(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
            Self::Feature => "featured",
            Self::Unfeature => "unfeatured",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: "r1".into(),
            rating,
            title: String::new(),
            content: "Soft and easy to put on".into(),
            author: "Ada Obi".into(),
            product: None,
            approved: false,
            featured: false,
            created_at: None,
        }
    }

    #[test]
    fn stars_fill_up_to_five() {
        assert_eq!(review(4).stars(), "★★★★☆");
        assert_eq!(review(9).stars(), "★★★★★");
        assert_eq!(review(0).stars(), "☆☆☆☆☆");
    }

    #[test]
    fn actions_touch_one_flag() {
        assert_eq!(ReviewAction::Approve.to_update().is_approved, Some(true));
        assert_eq!(ReviewAction::Approve.to_update().is_featured, None);
        assert_eq!(ReviewAction::Unfeature.to_update().is_featured, Some(false));
        assert_eq!("REJECT".parse::<ReviewAction>().ok(), Some(ReviewAction::Reject));
    }
}

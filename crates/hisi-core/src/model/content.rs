// ── Marketing content ──

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One slide of the home hero carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroSlide {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub cta_link: String,
}

/// Mission/about block shown on the home and about pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub published_at: Option<DateTime<Utc>>,
    pub image: String,
    /// Full body; only populated by the single-post endpoint.
    pub content: Option<String>,
}

/// A media coverage entry on the press page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressItem {
    pub title: String,
    pub outlet: String,
    pub url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub excerpt: String,
}

// ── View-models ──
//
// Every type here is what a renderer consumes after the API shape has been
// mapped, renamed and defaulted. Nothing in this module is persisted.

pub mod admin;
pub mod content;
pub mod money;
pub mod product;
pub mod review;
pub mod section;

// ── Re-exports ──────────────────────────────────────────────────────

pub use money::format_naira;

// Storefront
pub use content::{AboutContent, BlogPost, HeroSlide, PressItem};
pub use product::{CollectionCard, ProductCard};

// Admin
pub use admin::{
    AnalyticsReport, Conversation, CustomerDetail, CustomerRow, DashboardMetrics, ExportFormat,
    Inquiry, MediaItem, Message, OrderDetail, OrderLine, OrderRow, OrderStatus, Period, TopProduct,
};
pub use review::{Review, ReviewAction, ReviewStats, ReviewStatus};
pub use section::{EditablePage, SectionEdit, SectionField, SectionSaveReport};

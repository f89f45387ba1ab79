//! Headless state layer between `hisi-api` and the CLI / TUI front ends.
//!
//! Everything a renderer needs, with no rendering in it:
//!
//! - **[`Storefront`]** / **[`AdminConsole`]**: typed services over the
//!   store API. Customer-facing reads go through [`fetch_with_fallback`],
//!   so a failing backend renders built-in content instead of an error.
//!   Admin calls surface failures for notices.
//!
//! - **[`FetchCell<T>`]**: observable per-view fetch state
//!   ([`FetchResult`] over a `watch` channel). Request generations and the
//!   [`Mount`] guard discard responses that belong to a superseded request
//!   or a torn-down view.
//!
//! - **[`ListController<T>`]**: paginated, filtered list views. Runs a
//!   background task per list, debounces search edits and re-fetches after
//!   successful mutations.
//!
//! - **[`Carousel`]**: slide/pause state machine plus an
//!   [`AutoplayTimer`] released on drop.
//!
//! - **[`PreferencesContext`]** / **[`SettingsEditor`]**: admin settings and
//!   the process-wide font scale and contrast they control.
//!
//! - **Model** ([`model`]): view-models after field renaming and default
//!   substitution.

pub mod admin;
pub mod carousel;
pub mod config;
pub mod convert;
pub mod error;
pub mod fallback;
pub mod fetch;
pub mod listing;
pub mod model;
pub mod notice;
pub mod preferences;
pub mod storefront;

// ── Primary re-exports ──────────────────────────────────────────────
pub use admin::{AdminConsole, BlogPostDraft, CollectionDraft, ProductDraft};
pub use carousel::{
    AutoplayTimer, Carousel, CarouselConfig, CarouselInput, CarouselKey, PlayState, ResumePolicy,
    SwipeDirection,
};
pub use config::ClientConfig;
pub use error::CoreError;
pub use fetch::{
    DataSource, EmptyPolicy, FetchCell, FetchResult, FetchStatus, Loaded, Mount, Outcome, Scope,
    ViewData, fetch_with_fallback,
};
pub use listing::{ListController, ListQuery, ListSnapshot, Pagination, SortOrder};
pub use notice::{Notice, NoticeLevel};
pub use preferences::{
    AdminSettings, FontSize, PendingSave, PreferencesContext, Presentation, SettingKey,
    SettingsEditor,
};
pub use storefront::{ReviewDraft, Storefront};

pub use hisi_api::Page;
pub use hisi_api::types::ContactForm;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AboutContent, AnalyticsReport, BlogPost, CollectionCard, Conversation, CustomerDetail,
    CustomerRow, DashboardMetrics, EditablePage, ExportFormat, HeroSlide, Inquiry, MediaItem,
    Message, OrderDetail, OrderLine, OrderRow, OrderStatus, Period, PressItem, ProductCard, Review,
    ReviewAction, ReviewStats, ReviewStatus, SectionEdit, SectionField, SectionSaveReport,
    TopProduct, format_naira,
};

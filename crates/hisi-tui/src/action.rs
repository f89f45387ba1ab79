//! All UI actions. Screens and background tasks only change state by
//! sending one of these through the app's channel.

use hisi_core::{
    AdminSettings, FetchResult, HeroSlide, ListSnapshot, Loaded, Notice, OrderRow, Presentation,
    ProductCard,
};

use crate::screen::ScreenId;

/// The two carousels on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselId {
    Hero,
    Products,
}

#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    ToggleHelp,

    // ── Storefront data ───────────────────────────────────────────
    HeroLoaded(Loaded<Vec<HeroSlide>>),
    FeaturedLoaded(Loaded<Vec<ProductCard>>),
    CarouselTick(CarouselId),

    // ── Admin data ────────────────────────────────────────────────
    OrdersUpdated(ListSnapshot<OrderRow>),
    OrderStatusUpdated(Notice),
    SettingsLoaded(FetchResult<AdminSettings>),
    SettingsSaved(Notice),

    // ── Presentation ──────────────────────────────────────────────
    PresentationChanged(Presentation),

    // ── Notices ───────────────────────────────────────────────────
    Notify(Notice),
    DismissNotice,
}

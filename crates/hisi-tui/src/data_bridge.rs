//! Data bridge: runs the storefront loads and forwards core watch
//! channels (presentation, order list) into the TUI as [`Action`]s.

use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use hisi_core::{ListController, OrderRow, PreferencesContext, Storefront};

use crate::action::Action;

/// Products requested for the home carousel.
pub const FEATURED_LIMIT: u32 = 8;

/// Run until `cancel` fires. Storefront content loads concurrently with
/// the forwarding loop so a slow CMS never delays the order list.
pub async fn spawn_data_bridge(
    storefront: Storefront,
    preferences: PreferencesContext,
    orders: Option<Arc<ListController<OrderRow>>>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let home = load_home(storefront, action_tx.clone());
    tokio::pin!(home);
    let mut home_done = false;

    let mut presentation = preferences.stream();
    let mut orders = orders.map(|controller| controller.stream());

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            () = &mut home, if !home_done => home_done = true,

            Some(p) = presentation.next() => {
                debug!(font_size = %p.font_size, high_contrast = p.high_contrast, "presentation changed");
                let _ = action_tx.send(Action::PresentationChanged(p));
            }

            Some(snapshot) = next_or_pending(orders.as_mut()) => {
                let _ = action_tx.send(Action::OrdersUpdated(snapshot));
            }
        }
    }

    debug!("data bridge shut down");
}

async fn load_home(storefront: Storefront, action_tx: mpsc::UnboundedSender<Action>) {
    let (hero, featured) = tokio::join!(
        storefront.hero_slides(),
        storefront.featured_products(FEATURED_LIMIT),
    );
    info!(
        hero = hero.data.len(),
        featured = featured.data.len(),
        fallback = hero.is_fallback() || featured.is_fallback(),
        "home content loaded"
    );
    let _ = action_tx.send(Action::HeroLoaded(hero));
    let _ = action_tx.send(Action::FeaturedLoaded(featured));
}

/// Next item of an optional stream; never resolves when there is none.
async fn next_or_pending<S>(stream: Option<&mut S>) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    match stream {
        Some(stream) => stream.next().await,
        None => std::future::pending().await,
    }
}

//! Screen implementations. Each screen is a top-level Component.

pub mod home;
pub mod orders;
pub mod settings;

use std::sync::Arc;

use hisi_core::{AdminConsole, ListController, OrderRow, PreferencesContext};

use crate::component::Component;
use crate::screen::ScreenId;

use self::home::HomeScreen;
use self::orders::OrdersScreen;
use self::settings::SettingsScreen;

/// Build every screen. Admin screens still render without a token and
/// say how to configure one.
pub fn create_screens(
    admin: Option<AdminConsole>,
    orders: Option<Arc<ListController<OrderRow>>>,
    preferences: PreferencesContext,
) -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::Home, Box::new(HomeScreen::new())),
        (
            ScreenId::Orders,
            Box::new(OrdersScreen::new(admin.clone(), orders)),
        ),
        (
            ScreenId::Settings,
            Box::new(SettingsScreen::new(admin, preferences)),
        ),
    ]
}

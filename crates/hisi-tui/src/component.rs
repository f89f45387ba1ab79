//! Component trait, implemented by every screen.

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::theme::Theme;

/// Lifecycle: `init` → (`handle_key_event` | `handle_mouse_event` | `update` | `render`)*
pub trait Component: Send {
    /// Called once, before the first event, with the app's action sender.
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Every non-lifecycle action reaches every screen; ignore the rest.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Called when the screen becomes (or stops being) the visible one.
    fn set_focused(&mut self, _focused: bool) {}

    /// While true the app forwards every key here, global shortcuts
    /// included (search box, pickers).
    fn captures_input(&self) -> bool {
        false
    }
}

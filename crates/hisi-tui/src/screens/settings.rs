//! Settings screen: admin preferences with an explicit save.
//!
//! Edits stay local until `s`. Saving hands the edits to
//! [`SettingsEditor::begin_save`], which applies font scale and contrast to
//! the whole UI straight away and refuses a second save while one is in
//! flight; the persist call then runs in the screen's scope.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use hisi_core::{
    AdminConsole, AdminSettings, FetchCell, FetchResult, FetchStatus, Notice, PreferencesContext,
    Scope, SettingKey, SettingsEditor,
};

use crate::action::Action;
use crate::component::Component;
use crate::theme::Theme;
use crate::widgets::centered;

pub struct SettingsScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    admin: Option<AdminConsole>,
    editor: SettingsEditor,
    keys: Vec<SettingKey>,
    selected: usize,
    load: FetchResult<AdminSettings>,
    cell: Arc<FetchCell<AdminSettings>>,
    saving: bool,
    throbber_state: ThrobberState,
    /// Loads and saves die with the screen.
    scope: Scope,
}

impl SettingsScreen {
    pub fn new(admin: Option<AdminConsole>, preferences: PreferencesContext) -> Self {
        Self {
            focused: false,
            action_tx: None,
            editor: SettingsEditor::new(AdminSettings::default(), preferences),
            admin,
            keys: SettingKey::all().collect(),
            selected: 0,
            load: FetchResult::idle(),
            cell: Arc::new(FetchCell::new()),
            saving: false,
            throbber_state: ThrobberState::default(),
            scope: Scope::new(),
        }
    }

    fn selected_key(&self) -> Option<SettingKey> {
        self.keys.get(self.selected).copied()
    }

    /// Fetch stored settings. The result comes back as `SettingsLoaded`.
    fn reload(&mut self) {
        let (Some(admin), Some(tx)) = (self.admin.clone(), self.action_tx.clone()) else {
            return;
        };
        self.load.status = FetchStatus::Loading;
        let cell = Arc::clone(&self.cell);
        let mount = self.scope.mount();
        self.scope.spawn(async move {
            cell.load(&mount, admin.settings()).await;
            let _ = tx.send(Action::SettingsLoaded(cell.snapshot()));
        });
    }

    /// Start a save. Contrast and font scale apply before the backend is
    /// asked, so they stick even if the persist call fails.
    fn save(&mut self) -> Option<Action> {
        let pending = match self.editor.begin_save() {
            Ok(pending) => pending,
            Err(e) => return Some(Action::Notify(Notice::error(e.to_string()))),
        };

        let (Some(admin), Some(tx)) = (self.admin.clone(), self.action_tx.clone()) else {
            drop(pending);
            return Some(Action::Notify(Notice::error(
                "Saving settings failed: no admin token configured",
            )));
        };

        self.saving = true;
        self.scope.spawn(async move {
            let settings = pending.settings().clone();
            let result = pending.finish(admin.save_settings(&settings)).await;
            let _ = tx.send(Action::SettingsSaved(Notice::from_result(
                "Saving settings",
                &result,
            )));
        });
        None
    }

    fn apply_loaded(&mut self, result: &FetchResult<AdminSettings>) {
        self.load = result.clone();
        match (&result.status, &result.data) {
            (FetchStatus::Success, Some(settings)) => {
                // Stored presentation takes effect on the next save.
                self.editor.load(settings.clone());
            }
            (FetchStatus::Error, _) => {
                warn!(error = ?result.error_message, "settings unavailable, keeping defaults");
            }
            _ => {}
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn setting_line(&self, key: SettingKey, selected: bool, theme: &Theme) -> Line<'static> {
        let settings = self.editor.settings();
        let marker = if selected { "▸ " } else { "  " };
        let value = key.get(settings);
        let control = if key == SettingKey::FontSize {
            Span::styled(format!("◂ {value} ▸"), theme.key())
        } else if value == "true" {
            Span::styled("[x]", theme.success())
        } else {
            Span::styled("[ ]", theme.muted())
        };
        let line = Line::from(vec![
            Span::styled(marker, theme.heading()),
            control,
            Span::raw("  "),
            Span::styled(key.label(), theme.text()),
        ]);
        if selected {
            line.style(theme.selected())
        } else {
            line
        }
    }

    fn status_line(&self, theme: &Theme) -> Line<'static> {
        match (&self.admin, &self.load.status) {
            (None, _) => Line::from(Span::styled(
                "No admin token: changes apply locally but cannot be saved.",
                theme.muted(),
            )),
            (Some(_), FetchStatus::Loading) => {
                Line::from(Span::styled("Loading saved settings…", theme.muted()))
            }
            (Some(_), FetchStatus::Error) => Line::from(Span::styled(
                format!(
                    "Could not load settings: {}",
                    self.load.error_message.as_deref().unwrap_or("unknown error")
                ),
                theme.error(),
            )),
            (Some(_), _) => Line::default(),
        }
    }
}

impl Component for SettingsScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        self.reload();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.keys.len().saturating_sub(1));
            }
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(key) = self.selected_key() {
                    self.editor.toggle(key);
                }
            }
            KeyCode::Char('s') => return Ok(self.save()),
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SettingsLoaded(result) => self.apply_loaded(result),
            Action::SettingsSaved(notice) => {
                self.saving = false;
                return Ok(Some(Action::Notify(notice.clone())));
            }
            Action::Tick => {
                if self.saving {
                    self.throbber_state.calc_next();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Block::default().style(theme.background()), area);

        let gap = theme.line_gap();
        let rows = u16::try_from(self.keys.len()).unwrap_or(8) * (1 + gap);
        let panel = centered(area, 64, rows + 8);
        let block = Block::default()
            .title(Span::styled(" Preferences ", theme.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border(self.focused))
            .padding(theme.padding());
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let [status, list, _, footer, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(self.status_line(theme)), status);

        let mut lines = Vec::with_capacity(self.keys.len() * usize::from(1 + gap));
        for (i, key) in self.keys.iter().enumerate() {
            lines.push(self.setting_line(*key, i == self.selected, theme));
            lines.extend(std::iter::repeat_n(Line::default(), usize::from(gap)));
        }
        frame.render_widget(Paragraph::new(lines), list);

        if self.saving {
            let throbber = Throbber::default()
                .label(" Saving settings…")
                .style(theme.text())
                .throbber_style(theme.heading());
            frame.render_stateful_widget(throbber, footer, &mut self.throbber_state.clone());
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "j/k move  Space toggle  s save  r reload",
                theme.hint(),
            ))
            .centered(),
            hints,
        );
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use hisi_core::FontSize;

    use super::*;

    fn press(screen: &mut SettingsScreen, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap_or_else(|e| panic!("{e}"))
    }

    fn select(screen: &mut SettingsScreen, key: SettingKey) {
        screen.selected = screen
            .keys
            .iter()
            .position(|k| *k == key)
            .unwrap_or_else(|| panic!("{key} missing"));
    }

    #[test]
    fn toggles_stay_local_until_saved() {
        let preferences = PreferencesContext::default();
        let mut screen = SettingsScreen::new(None, preferences.clone());
        select(&mut screen, SettingKey::HighContrast);
        press(&mut screen, KeyCode::Char(' '));
        assert!(screen.editor.settings().high_contrast);
        assert!(!preferences.current().high_contrast);
    }

    #[test]
    fn save_without_admin_still_applies_presentation() {
        let preferences = PreferencesContext::default();
        let mut screen = SettingsScreen::new(None, preferences.clone());
        select(&mut screen, SettingKey::HighContrast);
        press(&mut screen, KeyCode::Enter);
        select(&mut screen, SettingKey::FontSize);
        press(&mut screen, KeyCode::Enter);

        let follow_up = press(&mut screen, KeyCode::Char('s'));
        assert!(preferences.current().high_contrast);
        assert_eq!(preferences.current().font_size, FontSize::Large);
        assert!(matches!(follow_up, Some(Action::Notify(n)) if n.is_error()));
        assert!(!screen.saving);
    }

    #[test]
    fn loaded_settings_replace_edits_but_not_presentation() {
        let preferences = PreferencesContext::default();
        let mut screen = SettingsScreen::new(None, preferences.clone());
        let stored = AdminSettings {
            font_size: FontSize::Small,
            high_contrast: true,
            ..AdminSettings::default()
        };
        screen
            .update(&Action::SettingsLoaded(FetchResult {
                status: FetchStatus::Success,
                data: Some(stored.clone()),
                error_message: None,
            }))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(screen.editor.settings(), &stored);
        assert_eq!(preferences.current().font_size, FontSize::Medium);
        assert!(!preferences.current().high_contrast);
    }

    #[test]
    fn failed_load_keeps_defaults() {
        let mut screen = SettingsScreen::new(None, PreferencesContext::default());
        screen
            .update(&Action::SettingsLoaded(FetchResult {
                status: FetchStatus::Error,
                data: None,
                error_message: Some("connection refused".into()),
            }))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(screen.editor.settings(), &AdminSettings::default());
    }

    #[test]
    fn saved_notice_is_forwarded() {
        let mut screen = SettingsScreen::new(None, PreferencesContext::default());
        screen.saving = true;
        let follow_up = screen
            .update(&Action::SettingsSaved(Notice::success("Saving settings succeeded")))
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(!screen.saving);
        assert!(matches!(follow_up, Some(Action::Notify(n)) if !n.is_error()));
    }
}

//! Application core: event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use hisi_core::{
    AdminConsole, DataSource, ListController, ListQuery, Notice, OrderRow, PreferencesContext,
    Storefront,
};

use crate::action::Action;
use crate::component::Component;
use crate::data_bridge::spawn_data_bridge;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme::Theme;
use crate::tui::Tui;
use crate::widgets::centered;

/// Backend handles the app is built from.
pub struct Services {
    pub storefront: Storefront,
    /// `None` without a token; admin screens then explain how to add one.
    pub admin: Option<AdminConsole>,
    pub preferences: PreferencesContext,
    pub per_page: u32,
}

/// Top-level application state and event loop.
pub struct App {
    active_screen: ScreenId,
    screens: HashMap<ScreenId, Box<dyn Component>>,
    running: bool,
    help_visible: bool,
    /// Blocks all other input until dismissed.
    notice: Option<Notice>,
    theme: Theme,
    /// Where home content came from; `None` until the first load.
    content_source: Option<DataSource>,
    admin_enabled: bool,
    storefront: Storefront,
    preferences: PreferencesContext,
    orders: Option<Arc<ListController<OrderRow>>>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Stops the data bridge when the loop exits.
    bridge_cancel: CancellationToken,
}

impl App {
    /// Build every screen. Must run inside the Tokio runtime: the order
    /// list starts fetching straight away.
    pub fn new(services: Services) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let orders = services.admin.clone().map(|admin| {
            Arc::new(ListController::spawn(
                ListQuery::new(services.per_page),
                move |query| {
                    let admin = admin.clone();
                    async move { admin.orders(&query).await }
                },
            ))
        });

        let screens = create_screens(
            services.admin.clone(),
            orders.clone(),
            services.preferences.clone(),
        )
        .into_iter()
        .collect();

        Self {
            active_screen: ScreenId::Home,
            screens,
            running: true,
            help_visible: false,
            notice: None,
            theme: Theme::from_presentation(services.preferences.current()),
            content_source: None,
            admin_enabled: services.admin.is_some(),
            storefront: services.storefront,
            preferences: services.preferences,
            orders,
            action_tx,
            action_rx,
            bridge_cancel: CancellationToken::new(),
        }
    }

    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.init_screens()?;

        tokio::spawn(spawn_data_bridge(
            self.storefront.clone(),
            self.preferences.clone(),
            self.orders.clone(),
            self.action_tx.clone(),
            self.bridge_cancel.clone(),
        ));

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!(admin = self.admin_enabled, "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.bridge_cancel.cancel();
        events.stop();
        tui.exit();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Key priority: open notice, help overlay, a screen capturing text
    /// input, global keys, then the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.notice.is_some() {
            return Ok(match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissNotice),
                _ => None,
            });
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            if screen.captures_input() {
                return screen.handle_key_event(key);
            }
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='3')) => {
                let n = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
                if let Some(screen) = n.and_then(ScreenId::from_number) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (_, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }
            _ => {}
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.notice.is_some() || self.help_visible {
            return Ok(None);
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::Notify(notice) => {
                info!(error = notice.is_error(), message = %notice.message, "notice raised");
                self.notice = Some(notice.clone());
            }

            Action::DismissNotice => self.notice = None,

            Action::PresentationChanged(presentation) => {
                self.theme = Theme::from_presentation(*presentation);
            }

            Action::Render => {}

            other => {
                match other {
                    Action::HeroLoaded(loaded) => self.note_source(loaded.source),
                    Action::FeaturedLoaded(loaded) => self.note_source(loaded.source),
                    _ => {}
                }
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(other)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Either load falling back marks the whole home page as built-in.
    fn note_source(&mut self, source: DataSource) {
        self.content_source = match (self.content_source, source) {
            (Some(DataSource::Fallback), _) | (_, DataSource::Fallback) => {
                Some(DataSource::Fallback)
            }
            _ => Some(DataSource::Live),
        };
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.background()), area);

        let [content, tabs, status] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, content, &self.theme);
        }
        self.render_tab_bar(frame, tabs);
        self.render_status_bar(frame, status);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
        if let Some(notice) = &self.notice {
            self.render_notice(frame, area, notice);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    self.theme.tab(id == self.active_screen),
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", self.theme.hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );
        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let source = match self.content_source {
            Some(DataSource::Live) => {
                Span::styled("● live", Style::default().fg(self.theme.success))
            }
            Some(DataSource::Fallback) => Span::styled(
                "◐ built-in content",
                Style::default().fg(self.theme.warning),
            ),
            None => Span::styled("○ loading", self.theme.muted()),
        };
        let admin = if self.admin_enabled {
            Span::styled("admin", Style::default().fg(self.theme.info))
        } else {
            Span::styled("read-only", self.theme.muted())
        };
        let presentation = format!(
            "{}{}",
            self.theme.font_size,
            if self.theme.high_contrast { " · high contrast" } else { "" }
        );

        let line = Line::from(vec![
            Span::raw(" "),
            source,
            Span::styled(" │ ", self.theme.hint()),
            admin,
            Span::styled(" │ ", self.theme.hint()),
            Span::styled(presentation, self.theme.muted()),
            Span::styled(" │ ? help  Tab next  q quit", self.theme.hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_area = centered(
            area,
            60u16.min(area.width.saturating_sub(4)),
            22u16.min(area.height.saturating_sub(4)),
        );
        frame.render_widget(Clear, help_area);

        let block = Block::default()
            .title(Span::styled(" Keyboard Shortcuts ", self.theme.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border(true))
            .style(Style::default().bg(self.theme.bg_raised));
        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let section = |name: &'static str| {
            Line::from(Span::styled(format!("  {name}"), self.theme.heading()))
        };
        let entry = |keys: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<12}"), self.theme.key()),
                Span::styled(what, self.theme.hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            section("Global"),
            entry("1-3", "Jump to screen"),
            entry("Tab", "Next screen"),
            entry("?", "This help"),
            entry("q", "Quit"),
            Line::from(""),
            section("Home"),
            entry("←/→  h/l", "Previous / next slide"),
            entry("f", "Switch carousel"),
            entry("drag", "Swipe between slides"),
            Line::from(""),
            section("Orders"),
            entry("j/k", "Move"),
            entry("n/p", "Next / previous page"),
            entry("/  f", "Search / filter by status"),
            entry("s", "Change status"),
            Line::from(""),
            section("Settings"),
            entry("Space", "Toggle"),
            entry("s", "Save"),
            Line::from(""),
            Line::from(Span::styled("  Esc or ? to close", self.theme.hint())),
        ];
        frame.render_widget(Paragraph::new(help_text), inner);
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect, notice: &Notice) {
        let popup = centered(area, 56u16.min(area.width.saturating_sub(4)), 7);
        frame.render_widget(Clear, popup);

        let (title, style) = if notice.is_error() {
            (" Error ", self.theme.error())
        } else {
            (" Done ", self.theme.success())
        };
        let block = Block::default()
            .title(Span::styled(title, style))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(Style::default().bg(self.theme.bg_raised));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [message, _, hint] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(notice.message.clone(), self.theme.text()))
                .wrap(Wrap { trim: true })
                .centered(),
            message,
        );
        frame.render_widget(
            Paragraph::new(Span::styled("Enter to dismiss", self.theme.hint())).centered(),
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use hisi_core::{ClientConfig, Loaded};
    use pretty_assertions::assert_eq;

    use super::*;

    fn app() -> App {
        let config = ClientConfig::new(
            "http://127.0.0.1:9"
                .parse()
                .unwrap_or_else(|e| panic!("{e}")),
        );
        let storefront = Storefront::from_config(&config).unwrap_or_else(|e| panic!("{e}"));
        App::new(Services {
            storefront,
            admin: None,
            preferences: PreferencesContext::default(),
            per_page: 20,
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn number_keys_switch_screens() {
        let mut app = app();
        let action = app
            .handle_key_event(key(KeyCode::Char('2')))
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(action, Some(Action::SwitchScreen(ScreenId::Orders))));

        app.process_action(&Action::SwitchScreen(ScreenId::Orders))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(app.active_screen, ScreenId::Orders);
    }

    #[tokio::test]
    async fn notice_blocks_input_until_dismissed() {
        let mut app = app();
        app.process_action(&Action::Notify(Notice::error("Status update failed: boom")))
            .unwrap_or_else(|e| panic!("{e}"));

        let swallowed = app
            .handle_key_event(key(KeyCode::Char('2')))
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(swallowed.is_none());

        let dismiss = app
            .handle_key_event(key(KeyCode::Enter))
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(dismiss, Some(Action::DismissNotice)));
        app.process_action(&Action::DismissNotice)
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn help_overlay_only_closes() {
        let mut app = app();
        app.process_action(&Action::ToggleHelp)
            .unwrap_or_else(|e| panic!("{e}"));
        let ignored = app
            .handle_key_event(key(KeyCode::Char('q')))
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(ignored.is_none());
        let close = app
            .handle_key_event(key(KeyCode::Esc))
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(close, Some(Action::ToggleHelp)));
    }

    #[tokio::test]
    async fn presentation_change_rebuilds_theme() {
        let mut app = app();
        let presentation = hisi_core::Presentation {
            font_size: hisi_core::FontSize::Large,
            high_contrast: true,
        };
        app.process_action(&Action::PresentationChanged(presentation))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(app.theme, Theme::from_presentation(presentation));
    }

    #[tokio::test]
    async fn any_fallback_marks_content_built_in() {
        let mut app = app();
        app.process_action(&Action::HeroLoaded(Loaded::live(Vec::new())))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(app.content_source, Some(DataSource::Live));

        let fallback = Loaded {
            data: hisi_core::fallback::featured_products(),
            source: DataSource::Fallback,
            error: Some("connection refused".into()),
        };
        app.process_action(&Action::FeaturedLoaded(fallback))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(app.content_source, Some(DataSource::Fallback));
    }
}

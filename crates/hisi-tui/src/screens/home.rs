//! Home screen: hero slideshow above the featured product strip.
//!
//! Keys: `←/→` (or `h/l`) move the focused carousel, `f` moves focus
//! between them. Mouse: hovering pauses, dragging more than the swipe
//! threshold changes slide, clicking a dot jumps to it. Autoplay timers
//! only run while the screen is visible.

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tokio::sync::mpsc::UnboundedSender;

use hisi_core::{
    AutoplayTimer, Carousel, CarouselConfig, CarouselInput, CarouselKey, DataSource, HeroSlide,
    ProductCard, fallback, format_naira,
};

use crate::action::{Action, CarouselId};
use crate::component::Component;
use crate::theme::Theme;
use crate::widgets::carousel::{column_px, dot_at, dots_line, play_marker};

/// Screen rects of one carousel from the last frame, for hit-testing.
#[derive(Debug, Clone, Copy, Default)]
struct Regions {
    panel: Rect,
    dots: Rect,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

pub struct HomeScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    slides: Vec<HeroSlide>,
    products: Vec<ProductCard>,
    source: Option<DataSource>,
    hero: Carousel,
    strip: Carousel,
    /// Dropping these stops autoplay.
    timers: Vec<AutoplayTimer>,
    hovered: Option<CarouselId>,
    dragging: Option<CarouselId>,
    hero_regions: Cell<Regions>,
    strip_regions: Cell<Regions>,
}

impl HomeScreen {
    /// Starts on the built-in content so the first frame is never empty.
    pub fn new() -> Self {
        let slides = fallback::hero_slides();
        let products = fallback::featured_products();
        let mut hero = Carousel::new(slides.len(), CarouselConfig::hero());
        hero.handle(CarouselInput::Focus(true));
        Self {
            focused: false,
            action_tx: None,
            strip: Carousel::new(products.len(), CarouselConfig::product()),
            hero,
            slides,
            products,
            source: None,
            timers: Vec::new(),
            hovered: None,
            dragging: None,
            hero_regions: Cell::new(Regions::default()),
            strip_regions: Cell::new(Regions::default()),
        }
    }

    fn carousel_mut(&mut self, id: CarouselId) -> &mut Carousel {
        match id {
            CarouselId::Hero => &mut self.hero,
            CarouselId::Products => &mut self.strip,
        }
    }

    fn focused_carousel(&self) -> CarouselId {
        if self.strip.is_focused() {
            CarouselId::Products
        } else {
            CarouselId::Hero
        }
    }

    fn start_autoplay(&mut self) {
        let Some(tx) = self.action_tx.clone() else {
            return;
        };
        self.timers = vec![
            AutoplayTimer::spawn(
                self.hero.config().interval,
                tx.clone(),
                Action::CarouselTick(CarouselId::Hero),
            ),
            AutoplayTimer::spawn(
                self.strip.config().interval,
                tx,
                Action::CarouselTick(CarouselId::Products),
            ),
        ];
    }

    fn cycle_focus(&mut self) {
        let to_strip = !self.strip.is_focused();
        self.hero.handle(CarouselInput::Focus(!to_strip));
        self.strip.handle(CarouselInput::Focus(to_strip));
    }

    fn carousel_at(&self, column: u16, row: u16) -> Option<CarouselId> {
        if contains(self.hero_regions.get().panel, column, row) {
            Some(CarouselId::Hero)
        } else if contains(self.strip_regions.get().panel, column, row) {
            Some(CarouselId::Products)
        } else {
            None
        }
    }

    fn regions(&self, id: CarouselId) -> Regions {
        match id {
            CarouselId::Hero => self.hero_regions.get(),
            CarouselId::Products => self.strip_regions.get(),
        }
    }

    /// Pointer movement: leave the old carousel, enter the new one.
    fn hover(&mut self, target: Option<CarouselId>) {
        if self.hovered == target {
            return;
        }
        if let Some(previous) = self.hovered {
            self.carousel_mut(previous).handle(CarouselInput::PointerLeave);
        }
        if let Some(next) = target {
            self.carousel_mut(next).handle(CarouselInput::HoverEnter);
        }
        self.hovered = target;
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn panel<'a>(title: Line<'a>, focused: bool, theme: &Theme) -> Block<'a> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border(focused))
            .padding(theme.padding())
    }

    fn carousel_title(label: &str, carousel: &Carousel, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {label} "), theme.title()),
            Span::styled(
                format!(
                    "{} {}/{} ",
                    play_marker(carousel.state()),
                    carousel.index() + 1,
                    carousel.len().max(1)
                ),
                theme.muted(),
            ),
        ])
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Self::panel(
            Self::carousel_title("Hisi Studio", &self.hero, theme),
            self.hero.is_focused(),
            theme,
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body, dots] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        self.hero_regions.set(Regions { panel: area, dots });

        if let Some(slide) = self.slides.get(self.hero.index()) {
            let gap = usize::from(theme.line_gap());
            let mut lines = vec![Line::from(Span::styled(
                slide.title.clone(),
                theme.heading().add_modifier(Modifier::UNDERLINED),
            ))];
            lines.extend(std::iter::repeat_n(Line::default(), gap));
            lines.push(Line::from(Span::styled(slide.subtitle.clone(), theme.text())));
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(format!("[ {} ]", slide.cta), theme.key()),
                Span::styled(format!("  → {}", slide.cta_link), theme.muted()),
            ]));
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
        }

        frame.render_widget(
            Paragraph::new(dots_line(self.hero.len(), self.hero.index(), theme)),
            dots,
        );
    }

    fn product_lines(product: &ProductCard, theme: &Theme) -> Vec<Line<'static>> {
        let mut title = vec![Span::styled(product.name.clone(), theme.heading())];
        if let Some(badge) = &product.badge {
            title.push(Span::raw("  "));
            title.push(Span::styled(
                format!(" {badge} "),
                Style::default().fg(theme.bg).bg(theme.secondary),
            ));
        }

        let mut price = vec![Span::styled(format_naira(product.price), theme.price())];
        if let Some(original) = product.original_price {
            price.push(Span::raw("  "));
            price.push(Span::styled(
                format_naira(original),
                theme.muted().add_modifier(Modifier::CROSSED_OUT),
            ));
        }

        let mut lines = vec![
            Line::from(title),
            Line::from(Span::styled(product.collection.clone(), theme.muted())),
            Line::from(price),
            Line::default(),
        ];
        lines.extend(product.accessibility_features.iter().map(|feature| {
            Line::from(vec![
                Span::styled("  ✓ ", theme.success()),
                Span::styled(feature.clone(), theme.text()),
            ])
        }));
        lines
    }

    fn render_strip(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Self::panel(
            Self::carousel_title("Featured", &self.strip, theme),
            self.strip.is_focused(),
            theme,
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body, dots] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        self.strip_regions.set(Regions { panel: area, dots });

        if let Some(product) = self.products.get(self.strip.index()) {
            frame.render_widget(
                Paragraph::new(Self::product_lines(product, theme)).wrap(Wrap { trim: true }),
                body,
            );
        } else {
            frame.render_widget(
                Paragraph::new(Span::styled("No featured products", theme.muted())),
                body,
            );
        }

        frame.render_widget(
            Paragraph::new(dots_line(self.strip.len(), self.strip.index(), theme)),
            dots,
        );
    }
}

impl Component for HomeScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        if self.focused {
            self.start_autoplay();
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let id = self.focused_carousel();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.carousel_mut(id)
                    .handle(CarouselInput::Key(CarouselKey::ArrowLeft));
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.carousel_mut(id)
                    .handle(CarouselInput::Key(CarouselKey::ArrowRight));
            }
            KeyCode::Char('f') => self.cycle_focus(),
            _ => {}
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let target = self.carousel_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => self.hover(target),
            MouseEventKind::Down(MouseButton::Left) => {
                self.hover(target);
                let Some(id) = target else {
                    return Ok(None);
                };
                let dots = self.regions(id).dots;
                let len = self.carousel_mut(id).len();
                let dot = (mouse.row == dots.y)
                    .then(|| dot_at(dots, mouse.column, len))
                    .flatten();
                if let Some(index) = dot {
                    self.carousel_mut(id).handle(CarouselInput::GoTo(index));
                } else {
                    let x = column_px(mouse.column);
                    self.carousel_mut(id).handle(CarouselInput::TouchStart { x });
                    self.dragging = Some(id);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(id) = self.dragging {
                    let x = column_px(mouse.column);
                    self.carousel_mut(id).handle(CarouselInput::TouchMove { x });
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(id) = self.dragging.take() {
                    self.carousel_mut(id).handle(CarouselInput::TouchEnd);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CarouselTick(id) => {
                self.carousel_mut(*id).handle(CarouselInput::Tick);
            }
            Action::HeroLoaded(loaded) => {
                self.slides.clone_from(&loaded.data);
                self.hero.set_len(self.slides.len());
                self.source = Some(loaded.source);
            }
            Action::FeaturedLoaded(loaded) => {
                self.products.clone_from(&loaded.data);
                self.strip.set_len(self.products.len());
                if loaded.source == DataSource::Fallback {
                    self.source = Some(DataSource::Fallback);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Block::default().style(theme.background()), area);

        let hero_height = 9 + theme.line_gap() * 2;
        let [hero, strip, hint] = Layout::vertical([
            Constraint::Length(hero_height),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_hero(frame, hero, theme);
        self.render_strip(frame, strip, theme);

        let mut spans = vec![
            Span::styled(" ←/→ ", theme.key()),
            Span::styled("slide  ", theme.hint()),
            Span::styled("f ", theme.key()),
            Span::styled("switch carousel  ", theme.hint()),
            Span::styled("drag ", theme.key()),
            Span::styled("swipe", theme.hint()),
        ];
        if self.source == Some(DataSource::Fallback) {
            spans.push(Span::styled("   showing built-in content", theme.muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), hint);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.start_autoplay();
        } else {
            self.timers.clear();
            self.hover(None);
            self.dragging = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use hisi_core::PlayState;

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A screen whose hit-test regions look like they were just rendered.
    fn laid_out() -> HomeScreen {
        let screen = HomeScreen::new();
        screen.hero_regions.set(Regions {
            panel: Rect::new(0, 0, 80, 9),
            dots: Rect::new(2, 7, 76, 1),
        });
        screen.strip_regions.set(Regions {
            panel: Rect::new(0, 9, 80, 12),
            dots: Rect::new(2, 19, 76, 1),
        });
        screen
    }

    #[test]
    fn starts_on_builtin_content() {
        let screen = HomeScreen::new();
        assert_eq!(screen.hero.len(), 3);
        assert_eq!(screen.strip.len(), 5);
        assert!(screen.hero.is_focused());
    }

    #[test]
    fn arrows_move_focused_carousel_only() {
        let mut screen = HomeScreen::new();
        screen
            .handle_key_event(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(screen.hero.index(), 1);
        assert_eq!(screen.strip.index(), 0);

        screen
            .handle_key_event(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE))
            .unwrap_or_else(|e| panic!("{e}"));
        screen
            .handle_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(screen.hero.index(), 1);
        assert_eq!(screen.strip.index(), 4);
    }

    #[test]
    fn drag_past_threshold_changes_slide() {
        let mut screen = laid_out();
        for event in [
            mouse(MouseEventKind::Down(MouseButton::Left), 40, 3),
            mouse(MouseEventKind::Drag(MouseButton::Left), 33, 3),
            mouse(MouseEventKind::Up(MouseButton::Left), 33, 3),
        ] {
            screen.handle_mouse_event(event).unwrap_or_else(|e| panic!("{e}"));
        }
        assert_eq!(screen.hero.index(), 1);
    }

    #[test]
    fn short_drag_keeps_slide() {
        let mut screen = laid_out();
        for event in [
            mouse(MouseEventKind::Down(MouseButton::Left), 40, 3),
            mouse(MouseEventKind::Drag(MouseButton::Left), 34, 3),
            mouse(MouseEventKind::Up(MouseButton::Left), 34, 3),
        ] {
            screen.handle_mouse_event(event).unwrap_or_else(|e| panic!("{e}"));
        }
        assert_eq!(screen.hero.index(), 0);
    }

    #[test]
    fn hover_pauses_and_leaving_follows_resume_policy() {
        let mut screen = laid_out();
        screen
            .handle_mouse_event(mouse(MouseEventKind::Moved, 10, 2))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(screen.hero.state(), PlayState::Paused);

        screen
            .handle_mouse_event(mouse(MouseEventKind::Moved, 10, 12))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(screen.hero.state(), PlayState::Playing);
        assert_eq!(screen.strip.state(), PlayState::Paused);

        screen
            .handle_mouse_event(mouse(MouseEventKind::Moved, 10, 30))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(screen.strip.state(), PlayState::Paused);
    }

    #[test]
    fn clicking_a_dot_jumps() {
        let mut screen = laid_out();
        screen
            .handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 6, 19))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(screen.strip.index(), 2);
    }

    #[test]
    fn ticks_advance_and_wrap() {
        let mut screen = HomeScreen::new();
        for _ in 0..3 {
            screen
                .update(&Action::CarouselTick(CarouselId::Hero))
                .unwrap_or_else(|e| panic!("{e}"));
        }
        assert_eq!(screen.hero.index(), 0);
    }

    #[tokio::test]
    async fn autoplay_runs_only_while_focused() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut screen = HomeScreen::new();
        screen.init(tx).unwrap_or_else(|e| panic!("{e}"));
        assert!(screen.timers.is_empty());
        screen.set_focused(true);
        assert_eq!(screen.timers.len(), 2);
        screen.set_focused(false);
        assert!(screen.timers.is_empty());
    }
}

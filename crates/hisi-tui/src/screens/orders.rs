//! Orders screen: the admin order list with search, status filter,
//! pagination and status updates.
//!
//! The list itself lives in a [`ListController`]; this screen only renders
//! the snapshots the data bridge forwards and turns keys into query edits.
//! A status change goes through [`ListController::mutate`], so the list is
//! re-fetched on success and left alone on failure. Either way the outcome
//! comes back as a blocking notice.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table,
    TableState,
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;
use tui_input::{Input, InputRequest};

use hisi_core::{
    AdminConsole, FetchStatus, ListController, ListSnapshot, Notice, OrderRow, OrderStatus,
    format_naira,
};

use crate::action::Action;
use crate::component::Component;
use crate::theme::Theme;
use crate::widgets::{centered, pager::pager_line};

const STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

const STATUS_FILTER: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Search,
    StatusPicker { index: usize },
}

/// Next value of the status filter: all → pending → … → cancelled → all.
fn next_filter(current: Option<OrderStatus>) -> Option<OrderStatus> {
    match current {
        None => Some(STATUSES[0]),
        Some(status) => {
            let pos = STATUSES.iter().position(|&s| s == status).unwrap_or(0);
            STATUSES.get(pos + 1).copied()
        }
    }
}

pub struct OrdersScreen {
    focused: bool,
    action_tx: Option<UnboundedSender<Action>>,
    admin: Option<AdminConsole>,
    list: Option<Arc<ListController<OrderRow>>>,
    snapshot: Option<ListSnapshot<OrderRow>>,
    selected: usize,
    mode: Mode,
    search: Input,
    status_filter: Option<OrderStatus>,
    updating: bool,
    throbber_state: ThrobberState,
}

impl OrdersScreen {
    pub fn new(admin: Option<AdminConsole>, list: Option<Arc<ListController<OrderRow>>>) -> Self {
        Self {
            focused: false,
            action_tx: None,
            admin,
            list,
            snapshot: None,
            selected: 0,
            mode: Mode::Browse,
            search: Input::default(),
            status_filter: None,
            updating: false,
            throbber_state: ThrobberState::default(),
        }
    }

    fn items(&self) -> &[OrderRow] {
        self.snapshot
            .as_ref()
            .map(|s| s.items.as_slice())
            .unwrap_or_default()
    }

    fn selected_order(&self) -> Option<&OrderRow> {
        self.items().get(self.selected)
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.items().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    fn cycle_filter(&mut self) {
        self.status_filter = next_filter(self.status_filter);
        if let Some(list) = &self.list {
            list.set_filter(STATUS_FILTER, self.status_filter.map_or("", OrderStatus::as_str));
        }
        self.selected = 0;
    }

    fn push_search(&self) {
        if let Some(list) = &self.list {
            list.set_search(self.search.value());
        }
    }

    fn open_picker(&mut self) {
        if self.updating {
            return;
        }
        if let Some(order) = self.selected_order() {
            let index = STATUSES.iter().position(|&s| s == order.status).unwrap_or(0);
            self.mode = Mode::StatusPicker { index };
        }
    }

    /// Submit a status change for the selected order. No optimistic edit:
    /// the row changes when the re-fetched page arrives.
    fn apply_status(&mut self, status: OrderStatus) {
        let Some(order) = self.selected_order().cloned() else {
            return;
        };
        if order.status == status {
            return;
        }
        let (Some(admin), Some(list), Some(tx)) =
            (self.admin.clone(), self.list.clone(), self.action_tx.clone())
        else {
            return;
        };

        info!(order = %order.order_number, from = %order.status, to = %status, "updating order status");
        self.updating = true;
        tokio::spawn(async move {
            let result = list
                .mutate(admin.update_order_status(&order.id, status))
                .await;
            let notice = Notice::from_result("Status update", &result);
            let _ = tx.send(Action::OrderStatusUpdated(notice));
        });
    }

    // ── Key handling per mode ────────────────────────────────────────

    fn browse_key(&mut self, key: KeyEvent) {
        let Some(list) = self.list.clone() else {
            return;
        };
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Char('g') => self.selected = 0,
            KeyCode::Char('G') => self.move_selection(isize::MAX),
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => {
                if list.next_page() {
                    self.selected = 0;
                }
            }
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => {
                if list.prev_page() {
                    self.selected = 0;
                }
            }
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('s') | KeyCode::Enter => self.open_picker(),
            KeyCode::Char('r') => list.refresh(),
            _ => {}
        }
    }

    fn search_key(&mut self, key: KeyEvent) {
        let request = match key.code {
            KeyCode::Esc => {
                self.search.reset();
                self.push_search();
                self.mode = Mode::Browse;
                return;
            }
            KeyCode::Enter => {
                self.mode = Mode::Browse;
                return;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputRequest::DeleteLine
            }
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return,
        };
        let changed = self.search.handle(request).is_some_and(|c| c.value);
        if changed {
            self.selected = 0;
            self.push_search();
        }
    }

    fn picker_key(&mut self, key: KeyEvent, index: usize) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.mode = Mode::StatusPicker {
                    index: (index + 1) % STATUSES.len(),
                };
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.mode = Mode::StatusPicker {
                    index: (index + STATUSES.len() - 1) % STATUSES.len(),
                };
            }
            KeyCode::Enter => {
                self.mode = Mode::Browse;
                self.apply_status(STATUSES[index]);
            }
            KeyCode::Esc => self.mode = Mode::Browse,
            _ => {}
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render_unavailable(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled("Admin access is not configured.", theme.heading())),
            Line::default(),
            Line::from(vec![
                Span::styled("Run ", theme.text()),
                Span::styled("hisi config set-token", theme.key()),
                Span::styled(" or pass ", theme.text()),
                Span::styled("--token", theme.key()),
                Span::styled(", then restart.", theme.text()),
            ]),
        ];
        let block = Block::default()
            .title(Span::styled(" Orders ", theme.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border(false))
            .padding(theme.padding());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let editing = self.mode == Mode::Search;
        let filter = self
            .status_filter
            .map_or("all", OrderStatus::label)
            .to_owned();
        let block = Block::default()
            .title(Span::styled(" Search ", theme.title()))
            .title_top(
                Line::from(vec![
                    Span::styled(" status: ", theme.muted()),
                    Span::styled(filter, theme.key()),
                    Span::raw(" "),
                ])
                .right_aligned(),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border(editing))
            .padding(theme.padding());
        let inner = block.inner(area);

        let width = usize::from(inner.width.max(1));
        let scroll = self.search.visual_scroll(width);
        let text = if self.search.value().is_empty() && !editing {
            Span::styled("press / to search by order number, name or email", theme.muted())
        } else {
            Span::styled(self.search.value().to_owned(), theme.text())
        };
        let scroll = u16::try_from(scroll).unwrap_or(0);
        frame.render_widget(Paragraph::new(text).scroll((0, scroll)).block(block), area);

        if editing {
            let cursor = self.search.visual_cursor().saturating_sub(usize::from(scroll));
            let x = inner.x + u16::try_from(cursor).unwrap_or(inner.width);
            frame.set_cursor_position((x.min(inner.x + inner.width), inner.y));
        }
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let loading = self
            .snapshot
            .as_ref()
            .is_none_or(|s| s.status == FetchStatus::Loading);
        let mut title = vec![Span::styled(" Orders ", theme.title())];
        if loading {
            title.push(Span::styled("loading… ", theme.muted()));
        }
        let mut block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border(self.focused && self.mode == Mode::Browse));
        if let Some(error) = self.snapshot.as_ref().and_then(|s| s.error.as_deref()) {
            block = block.title_bottom(Span::styled(format!(" {error} "), theme.error()));
        }

        let items = self.items();
        if items.is_empty() && !loading {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new(Span::styled("No orders match.", theme.muted())).centered(),
                inner,
            );
            return;
        }

        let header = Row::new(["Order", "Customer", "Email", "Total", "Status", "Placed"])
            .style(theme.table_header());
        let rows = items.iter().map(|order| {
            Row::new(vec![
                Cell::from(order.order_number.clone()),
                Cell::from(order.customer_name.clone()),
                Cell::from(Span::styled(order.customer_email.clone(), theme.muted())),
                Cell::from(Span::styled(format_naira(order.total), theme.price())),
                Cell::from(Span::styled(order.status.label(), theme.status(order.status))),
                Cell::from(
                    order
                        .created_at
                        .map_or_else(|| "-".to_owned(), |d| d.format("%Y-%m-%d").to_string()),
                ),
            ])
            .style(theme.text())
        });
        let widths = [
            Constraint::Length(12),
            Constraint::Min(16),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(11),
            Constraint::Length(11),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(theme.selected())
            .highlight_symbol("▸ ");

        let mut state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_footer(&self, frame: &mut Frame, pager: Rect, hints: Rect, theme: &Theme) {
        if let Some(snapshot) = &self.snapshot {
            frame.render_widget(
                Paragraph::new(pager_line(&snapshot.pagination, "orders", theme)).centered(),
                pager,
            );
        }

        if self.updating {
            let throbber = Throbber::default()
                .label(" Updating order status…")
                .style(theme.text())
                .throbber_style(theme.heading());
            frame.render_stateful_widget(throbber, hints, &mut self.throbber_state.clone());
            return;
        }

        let hint = match self.mode {
            Mode::Browse => "j/k move  ←/→ page  / search  f status filter  s change status  r refresh",
            Mode::Search => "type to search  Enter done  Esc clear",
            Mode::StatusPicker { .. } => "j/k choose  Enter apply  Esc cancel",
        };
        frame.render_widget(Paragraph::new(Span::styled(hint, theme.hint())).centered(), hints);
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect, index: usize, theme: &Theme) {
        let Some(order) = self.selected_order() else {
            return;
        };
        let height = u16::try_from(STATUSES.len()).unwrap_or(5) + 2;
        let popup = centered(area, 34, height);
        frame.render_widget(Clear, popup);

        let items = STATUSES.iter().map(|&status| {
            let marker = if status == order.status { " (current)" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(status.label(), theme.status(status)),
                Span::styled(marker, theme.muted()),
            ]))
        });
        let list = List::new(items)
            .block(
                Block::default()
                    .title(Span::styled(format!(" {} ", order.order_number), theme.title()))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border(true))
                    .style(theme.background()),
            )
            .highlight_style(theme.selected())
            .highlight_symbol("▸ ");
        let mut state = ListState::default().with_selected(Some(index));
        frame.render_stateful_widget(list, popup, &mut state);
    }
}

impl Component for OrdersScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            Mode::Browse => self.browse_key(key),
            Mode::Search => self.search_key(key),
            Mode::StatusPicker { index } => self.picker_key(key, index),
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::OrdersUpdated(snapshot) => {
                self.snapshot = Some(snapshot.clone());
                self.move_selection(0);
            }
            Action::OrderStatusUpdated(notice) => {
                self.updating = false;
                return Ok(Some(Action::Notify(notice.clone())));
            }
            Action::Tick => {
                if self.updating {
                    self.throbber_state.calc_next();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Block::default().style(theme.background()), area);
        if self.list.is_none() {
            Self::render_unavailable(frame, area, theme);
            return;
        }

        let [search, table, pager, hints] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_search(frame, search, theme);
        self.render_table(frame, table, theme);
        self.render_footer(frame, pager, hints, theme);

        if let Mode::StatusPicker { index } = self.mode {
            self.render_picker(frame, table, index, theme);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.mode = Mode::Browse;
        }
    }

    fn captures_input(&self) -> bool {
        self.mode != Mode::Browse
    }
}

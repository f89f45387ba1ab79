//! "◂ Prev  Page X of Y  Next ▸" footer for paginated tables.

use ratatui::text::{Line, Span};

use hisi_core::Pagination;

use crate::theme::Theme;

pub fn pager_line(pagination: &Pagination, noun: &str, theme: &Theme) -> Line<'static> {
    let arrow = |enabled: bool, label: &'static str| {
        let style = if enabled { theme.key() } else { theme.disabled() };
        Span::styled(label, style)
    };
    Line::from(vec![
        arrow(pagination.has_prev(), "◂ Prev"),
        Span::raw("   "),
        Span::styled(pagination.label(), theme.text()),
        Span::styled(format!(" · {} {noun}", pagination.total), theme.muted()),
        Span::raw("   "),
        arrow(pagination.has_next(), "Next ▸"),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn first_of_three_pages() {
        let theme = Theme::default();
        let line = pager_line(&Pagination::new(1, 20, 47), "orders", &theme);
        assert_eq!(text(&line), "◂ Prev   Page 1 of 3 · 47 orders   Next ▸");
        assert_eq!(line.spans[0].style, theme.disabled());
        assert_eq!(line.spans[5].style, theme.key());
    }

    #[test]
    fn last_page_disables_next() {
        let theme = Theme::default();
        let line = pager_line(&Pagination::new(3, 20, 47), "orders", &theme);
        assert_eq!(line.spans[0].style, theme.key());
        assert_eq!(line.spans[5].style, theme.disabled());
    }

    #[test]
    fn empty_list_is_single_page() {
        let line = pager_line(&Pagination::new(1, 20, 0), "orders", &Theme::default());
        assert_eq!(text(&line), "◂ Prev   Page 1 of 1 · 0 orders   Next ▸");
    }
}

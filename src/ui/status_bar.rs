use crate::ui::input::InputMode;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Bottom line: the search error area on the left, key hints after it.
pub struct StatusBar<'a> {
    pub error: Option<&'a str>,
    pub mode: InputMode,
    pub page: u32,
    pub total_pages: u32,
    pub in_flight: usize,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = || {
            Span::styled(
                "\u{2502}",
                Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
            )
        };

        let mut spans = Vec::new();
        if let Some(err) = self.error {
            spans.push(Span::styled(
                format!(" {err} "),
                Style::default()
                    .fg(theme::ERROR_FG)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(sep());
        }

        if self.total_pages > 0 {
            spans.push(Span::styled(
                format!(" page {}/{} ", self.page, self.total_pages),
                Style::default().bg(theme::STATUS_BG),
            ));
            spans.push(sep());
        }

        if self.in_flight > 0 {
            spans.push(Span::styled(
                format!(" fetching ({}) ", self.in_flight),
                Style::default().fg(theme::FILTER_COLOR).bg(theme::STATUS_BG),
            ));
            spans.push(sep());
        }

        let hint = match self.mode {
            InputMode::Normal => " / search  o stats  Tab focus  ? help  q quit",
            InputMode::Query => " Enter submit  Esc cancel",
            InputMode::Owner | InputMode::Repo => " Tab owner/repo  Enter look up  Esc cancel",
        };
        spans.push(Span::styled(
            hint,
            Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

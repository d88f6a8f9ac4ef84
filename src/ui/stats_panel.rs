use crate::stats::{StatsView, PLACEHOLDER};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub fn stats_lines(view: &StatsView) -> Vec<Line<'static>> {
    match view {
        StatsView::Empty => Vec::new(),
        StatsView::Failed(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme::ERROR_FG),
        ))],
        StatsView::Loaded { lines, .. } => {
            let mut out = Vec::with_capacity(lines.len() + 2);
            if let Some(title) = view.title() {
                out.push(Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(theme::SECTION_HEADER_FG)
                        .add_modifier(Modifier::BOLD),
                )));
                out.push(Line::default());
            }
            for stat in lines {
                let value_style = if stat.value == PLACEHOLDER {
                    Style::default().fg(theme::DIM_TEXT)
                } else {
                    Style::default()
                };
                out.push(Line::from(vec![
                    Span::raw(format!("{} ", stat.icon)),
                    Span::styled(format!("{}: ", stat.label), Style::default().fg(theme::ACCENT)),
                    Span::styled(stat.value.clone(), value_style),
                ]));
            }
            out
        }
    }
}

pub struct StatsPanel<'a> {
    pub view: &'a StatsView,
    pub focused: bool,
}

impl<'a> Widget for StatsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(" Repository Stats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border(self.focused)));

        Paragraph::new(stats_lines(self.view))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

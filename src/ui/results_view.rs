use crate::search::summary::RepositorySummary;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Heading, optional description, stats row.
pub fn summary_lines(summary: &RepositorySummary) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(3);

    lines.push(Line::from(vec![
        Span::styled(
            summary.name.clone(),
            Style::default()
                .fg(theme::SECTION_HEADER_FG)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Span::raw("  "),
        Span::styled(summary.url.clone(), Style::default().fg(theme::LINK_COLOR)),
    ]));

    if let Some(desc) = summary.visible_description() {
        lines.push(Line::from(Span::raw(desc.to_string())));
    }

    let label = Style::default().fg(theme::DIM_TEXT);
    let sep = || Span::styled("  \u{2502}  ", Style::default().fg(theme::BORDER_COLOR));
    lines.push(Line::from(vec![
        Span::styled("Stars: ", label),
        Span::styled(summary.stars.to_string(), Style::default().fg(theme::STAR_COLOR)),
        sep(),
        Span::styled("Forks: ", label),
        Span::raw(summary.forks.to_string()),
        sep(),
        Span::styled("Open Issues: ", label),
        Span::raw(summary.open_issues.to_string()),
        sep(),
        Span::styled("Last Updated: ", label),
        Span::raw(summary.last_updated_display.clone()),
    ]));

    lines
}

pub fn results_lines(summaries: &[RepositorySummary]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, summary) in summaries.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(summary_lines(summary));
    }
    lines
}

pub struct ResultsView<'a> {
    pub summaries: &'a [RepositorySummary],
    pub scroll: u16,
    pub focused: bool,
    pub loading: bool,
}

impl<'a> Widget for ResultsView<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let title = if self.loading {
            " Results (loading\u{2026}) "
        } else {
            " Results "
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border(self.focused)));

        Paragraph::new(results_lines(self.summaries))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const KEY_COLUMN: usize = 16;

const BINDINGS: &[(&str, &str)] = &[
    ("/ or s", "Edit search query"),
    ("Enter", "Submit / activate page"),
    ("o", "Edit owner/repo for stats"),
    ("Tab", "Owner \u{2194} repo (editing)"),
    ("Tab / S-Tab", "Cycle focus"),
    ("h/l  \u{2190}/\u{2192}", "Move page cursor"),
    ("j/k  \u{2191}/\u{2193}", "Scroll results"),
    ("Esc", "Cancel edit / close"),
    ("?", "This help"),
    ("q", "Quit"),
];

fn binding_lines() -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(theme::FILTER_COLOR)
        .add_modifier(Modifier::BOLD);
    BINDINGS
        .iter()
        .map(|&(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {key:<KEY_COLUMN$}"), key_style),
                Span::raw(desc),
            ])
        })
        .collect()
}

/// Keybinding popup drawn centered over the whole frame.
pub struct HelpPanel;

impl Widget for HelpPanel {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(50, 60, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Keybindings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));
        Paragraph::new(binding_lines()).block(block).render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    #[test]
    fn lists_every_binding_with_aligned_descriptions() {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buf::empty(area);
        HelpPanel.render(area, &mut buf);
        let screen = buffer_text(&buf).join("\n");

        assert!(screen.contains(" Keybindings "));
        for (key, desc) in BINDINGS {
            assert!(screen.contains(desc), "missing {key}: {desc}");
        }
        let line: String = binding_lines()[0]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(line.find("Edit search query"), Some(KEY_COLUMN + 1));
    }
}

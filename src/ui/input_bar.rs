use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line bordered text field.
pub struct InputBar<'a> {
    pub label: &'a str,
    pub text: &'a str,
    pub placeholder: &'a str,
    pub editing: bool,
}

impl<'a> Widget for InputBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let border = if self.editing {
            theme::FILTER_COLOR
        } else {
            theme::BORDER_COLOR
        };
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let max = inner.width.saturating_sub(2) as usize;
        let mut spans = vec![Span::raw(" ")];
        if self.text.is_empty() && !self.editing {
            spans.push(Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(theme::DIM_TEXT),
            ));
        } else {
            // keep the tail visible while typing past the edge
            let shown = if UnicodeWidthStr::width(self.text) > max && self.editing {
                let skip = self.text.chars().count().saturating_sub(max.saturating_sub(1));
                self.text.chars().skip(skip).collect::<String>()
            } else {
                truncate_with_ellipsis(self.text, max)
            };
            spans.push(Span::raw(shown));
        }
        if self.editing {
            spans.push(Span::styled(
                "\u{258c}",
                Style::default()
                    .fg(theme::FILTER_COLOR)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    fn draw(bar: InputBar) -> Vec<String> {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buf::empty(area);
        bar.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn shows_placeholder_when_idle_and_empty() {
        let rows = draw(InputBar {
            label: "Search",
            text: "",
            placeholder: "press / to search",
            editing: false,
        });
        assert!(rows[0].contains("Search"));
        assert!(rows[1].contains("press / to search"));
    }

    #[test]
    fn shows_text_and_cursor_while_editing() {
        let rows = draw(InputBar {
            label: "Search",
            text: "tokio",
            placeholder: "unused",
            editing: true,
        });
        assert!(rows[1].contains("tokio\u{258c}"));
        assert!(!rows[1].contains("unused"));
    }
}

use crate::search::pagination::PageControl;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

const GAP: u16 = 1;
/// Control rows shown at once; further rows scroll with the cursor.
pub const MAX_VISIBLE_ROWS: u16 = 4;

fn label(control: &PageControl) -> String {
    format!(" {} ", control.page)
}

/// Row-major placement of every control inside `width` columns, wrapping
/// to a new row instead of dropping pages.
pub fn control_positions(controls: &[PageControl], width: u16) -> Vec<(u16, u16)> {
    let mut positions = Vec::with_capacity(controls.len());
    let (mut x, mut y) = (0u16, 0u16);
    for control in controls {
        let w = label(control).len() as u16;
        if x > 0 && x + w > width {
            x = 0;
            y += 1;
        }
        positions.push((x, y));
        x += w + GAP;
    }
    positions
}

/// Outer height needed to show every control, borders included.
pub fn required_height(controls: &[PageControl], outer_width: u16) -> u16 {
    if controls.is_empty() {
        return 0;
    }
    let rows = control_positions(controls, outer_width.saturating_sub(2))
        .last()
        .map(|&(_, y)| y + 1)
        .unwrap_or(0);
    rows + 2
}

/// Height the bar is given: at most `MAX_VISIBLE_ROWS` control rows and no
/// more than `available`, but never below one row while controls exist.
pub fn bar_height(controls: &[PageControl], outer_width: u16, available: u16) -> u16 {
    let wanted = required_height(controls, outer_width);
    if wanted == 0 {
        return 0;
    }
    wanted.min(MAX_VISIBLE_ROWS + 2).min(available.max(3))
}

/// First wrapped row to draw so that `cursor_row` is inside a window of
/// `visible` rows.
pub fn first_visible_row(cursor_row: u16, visible: u16) -> u16 {
    cursor_row.saturating_sub(visible.saturating_sub(1))
}

pub struct PaginationBar<'a> {
    pub controls: &'a [PageControl],
    pub cursor: usize,
    pub focused: bool,
}

impl<'a> Widget for PaginationBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if self.controls.is_empty() || area.height < 3 {
            return;
        }

        let inner = Block::default().borders(Borders::ALL).inner(area);
        let positions = control_positions(self.controls, inner.width);
        let total_rows = positions.last().map_or(0, |&(_, y)| y + 1);
        let cursor_row = positions.get(self.cursor).map_or(0, |&(_, y)| y);
        let first = first_visible_row(cursor_row, inner.height);

        let title = if total_rows > inner.height {
            let last = (first + inner.height).min(total_rows);
            format!(" Pages (rows {}-{} of {}) ", first + 1, last, total_rows)
        } else {
            " Pages ".to_string()
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border(self.focused)))
            .render(area, buf);

        for (i, (control, &(dx, dy))) in self.controls.iter().zip(&positions).enumerate() {
            if dy < first {
                continue;
            }
            let row = dy - first;
            if row >= inner.height {
                break;
            }
            let mut style = if control.active {
                Style::default()
                    .fg(theme::HEADER_BG)
                    .bg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(theme::SELECTED_BG)
            };
            if self.focused && i == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
            }
            let text = label(control);
            buf.set_stringn(
                inner.x + dx,
                inner.y + row,
                &text,
                inner.width.saturating_sub(dx) as usize,
                style,
            );
        }
    }
}

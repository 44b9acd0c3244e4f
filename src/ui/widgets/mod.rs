pub mod current;
pub mod daily;
pub mod header;
pub mod hourly;
pub mod precipitation;
pub mod status;

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::ui::theme::Theme;

pub(super) fn panel_style(theme: Theme) -> Style {
    Style::default().fg(theme.text).bg(theme.surface)
}

pub(super) fn panel_block(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(panel_style(theme))
        .border_style(Style::default().fg(theme.border).bg(theme.surface))
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Frame, Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

    pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    pub(crate) fn draw<F>(width: u16, height: u16, draw_fn: F) -> String
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_fn(frame, area);
            })
            .expect("draw");
        buffer_to_string(terminal.backend().buffer())
    }
}

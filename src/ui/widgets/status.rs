#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    ui::{theme::Theme, widgets::panel_block},
};

pub const ERROR_TITLE: &str = "Network Error";
pub const RETRY_HINT: &str = "Press r to try again";

pub fn render_loading(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block("Loading", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spinner = loading_spinner(state.frame_tick);
    let bar_width = usize::from(inner.width).saturating_sub(4).clamp(8, 32);
    let lines = vec![
        Line::from(Span::styled(
            format!("{spinner} {}", loading_message(state.location.name)),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            indeterminate_bar(state.frame_tick, bar_width),
            Style::default().fg(theme.info),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: Theme) {
    let block = panel_block(ERROR_TITLE, theme)
        .border_style(Style::default().fg(theme.danger).bg(theme.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            ERROR_TITLE,
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(Span::styled(
            RETRY_HINT,
            Style::default().fg(theme.accent),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

#[must_use]
pub fn loading_message(place: &str) -> String {
    format!("Checking {place} weather...")
}

fn loading_spinner(frame_tick: u64) -> &'static str {
    const FRAMES: [&str; 4] = ["-", "\\", "|", "/"];
    FRAMES[(frame_tick % FRAMES.len() as u64) as usize]
}

fn indeterminate_bar(frame_tick: u64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut chars = vec!['·'; width];
    let head = (frame_tick % width as u64) as usize;
    chars[head] = '█';
    if head > 0 {
        chars[head - 1] = '▓';
    }
    if head + 1 < width {
        chars[head + 1] = '▓';
    }
    format!("[{}]", chars.into_iter().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::controller::FETCH_ERROR_MESSAGE,
        domain::weather::WeatherCategory,
        test_support::state_test_cli,
        ui::{
            theme::{ColorCapability, theme_for},
            widgets::test_support::draw,
        },
    };

    fn theme() -> Theme {
        theme_for(WeatherCategory::Unknown, ColorCapability::Basic16)
    }

    #[test]
    fn spinner_cycles_through_frames() {
        assert_eq!(loading_spinner(0), "-");
        assert_eq!(loading_spinner(1), "\\");
        assert_eq!(loading_spinner(4), "-");
    }

    #[test]
    fn indeterminate_bar_moves_head() {
        assert_eq!(indeterminate_bar(0, 4), "[█▓··]");
        assert_eq!(indeterminate_bar(2, 4), "[·▓█▓]");
        assert_eq!(indeterminate_bar(7, 4), "[··▓█]");
        assert_eq!(indeterminate_bar(3, 0), "");
    }

    #[test]
    fn loading_view_names_the_place() {
        let state = AppState::new(&state_test_cli());
        let text = draw(60, 6, |frame, area| {
            render_loading(frame, area, &state, theme());
        });
        assert!(text.contains("Checking Croissy-sur-Seine weather..."));
    }

    #[test]
    fn error_view_shows_message_and_retry_hint() {
        let text = draw(120, 8, |frame, area| {
            render_error(frame, area, FETCH_ERROR_MESSAGE, theme());
        });
        assert!(text.contains(ERROR_TITLE));
        assert!(text.contains("Unable to retrieve weather data for Croissy-sur-Seine."));
        assert!(text.contains(RETRY_HINT));
    }
}

pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{controller::ViewState, state::AppState},
    domain::weather::{LoadedForecast, WeatherCategory},
    ui::theme::{Theme, detect_color_capability, theme_for},
};

pub const FOOTER_TEXT: &str = "Data provided by Open-Meteo";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < 30 || area.height < 15 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 30x15.")
            .block(Block::default().borders(Borders::ALL).title("croissy-weather"));
        frame.render_widget(warning, area);
        return;
    }

    let capability = detect_color_capability();
    match state.view() {
        ViewState::Loading => {
            let theme = theme_for(WeatherCategory::Unknown, capability);
            widgets::status::render_loading(frame, centered_rect(70, 50, area), state, theme);
        }
        ViewState::Error(message) => {
            let theme = theme_for(WeatherCategory::Unknown, capability);
            widgets::status::render_error(frame, centered_rect(70, 50, area), message, theme);
        }
        ViewState::Success(loaded) => {
            let theme = theme_for(loaded.forecast.current.condition.category(), capability);
            render_dashboard(frame, area, state, loaded, theme);
        }
    }
}

fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    loaded: &LoadedForecast,
    theme: Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    widgets::header::render(frame, chunks[0], state, loaded, theme);
    widgets::current::render(frame, chunks[1], state, &loaded.forecast.current, theme);
    widgets::precipitation::render(frame, chunks[2], &loaded.forecast, theme);
    widgets::hourly::render(frame, chunks[3], state, &loaded.forecast.hourly, theme);
    widgets::daily::render(frame, chunks[4], state, &loaded.forecast.daily, theme);
    render_footer(frame, chunks[5], theme);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: Theme) {
    let footer = Paragraph::new(Line::from(FOOTER_TEXT))
        .style(Style::default().fg(theme.muted_text))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Sparkline},
};

use crate::{
    domain::weather::ForecastView,
    ui::{theme::Theme, widgets::panel_block},
};

pub fn render(frame: &mut Frame, area: Rect, forecast: &ForecastView, theme: Theme) {
    let block = panel_block("Precipitation (24h)", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width < 12 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(8), Constraint::Length(16)])
        .split(inner);

    let sparkline = Sparkline::default()
        .data(sparkline_values(forecast))
        .style(Style::default().fg(theme.info));
    frame.render_widget(sparkline, chunks[0]);

    let total = Line::from(vec![
        Span::styled(" Total ", Style::default().fg(theme.muted_text)),
        Span::styled(
            format!("{:.1} mm", forecast.total_precipitation_mm()),
            Style::default().fg(theme.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(total), chunks[1]);
}

/// Hourly precipitation in millilitres per square metre, one bar per hour.
pub(crate) fn sparkline_values(forecast: &ForecastView) -> Vec<u64> {
    forecast
        .hourly
        .iter()
        .map(|hour| hour.precipitation_ml().max(0.0).round() as u64)
        .collect()
}

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::weather::DailyPoint,
    ui::{
        theme::{Theme, icon_color, temp_color},
        widgets::{panel_block, panel_style},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, daily: &[DailyPoint], theme: Theme) {
    let block = panel_block("7-Day Forecast", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_rows = usize::from(inner.height.saturating_sub(1));
    if max_rows == 0 {
        return;
    }

    let rows: Vec<Row<'static>> = daily
        .iter()
        .take(max_rows)
        .map(|day| build_day_row(day, state.icon_mode, theme))
        .collect();
    let header = Row::new(["Day", "", "Conditions", "High", "Low"]).style(
        Style::default()
            .fg(theme.muted_text)
            .add_modifier(Modifier::BOLD),
    );
    let widths = [
        Constraint::Length(6),
        Constraint::Length(4),
        Constraint::Min(12),
        Constraint::Length(6),
        Constraint::Length(6),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .style(panel_style(theme));
    frame.render_widget(table, inner);
}

fn build_day_row(day: &DailyPoint, icon_mode: IconMode, theme: Theme) -> Row<'static> {
    Row::new(vec![
        Cell::from(day.day_label.clone()).style(Style::default().fg(theme.text)),
        Cell::from(day.condition.icon(icon_mode))
            .style(Style::default().fg(icon_color(&theme, day.condition.category()))),
        Cell::from(day.condition_label()).style(Style::default().fg(theme.muted_text)),
        Cell::from(format!("{}°", day.high)).style(Style::default().fg(temp_color(&theme, day.high))),
        Cell::from(format!("{}°", day.low)).style(Style::default().fg(temp_color(&theme, day.low))),
    ])
}

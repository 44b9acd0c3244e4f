#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::weather::{HOURLY_WINDOW, HourlyPoint},
    ui::{
        theme::{Theme, icon_color, temp_color},
        widgets::{panel_block, panel_style},
    },
};

const PANEL_BORDERS: u16 = 2;
const LABEL_WIDTH: u16 = 5;
// "23:00" plus one column of spacing.
const HOUR_COLUMN_WIDTH: u16 = 6;
const MIN_VISIBLE_HOURS: usize = 3;

/// How many hour columns fit in a strip `width` cells wide.
#[must_use]
pub fn visible_hour_count(width: u16) -> usize {
    let usable = width.saturating_sub(PANEL_BORDERS + LABEL_WIDTH);
    usize::from(usable / HOUR_COLUMN_WIDTH).clamp(MIN_VISIBLE_HOURS, HOURLY_WINDOW)
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    hourly: &[HourlyPoint],
    theme: Theme,
) {
    let block = panel_block("Hourly", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slice = visible_slice(hourly, state.hourly_offset, area.width);
    if slice.is_empty() || inner.height == 0 {
        return;
    }

    let rows = vec![
        build_time_row(slice, theme),
        build_icon_row(slice, state.icon_mode, theme),
        build_temp_row(slice, theme),
        build_probability_row(slice, theme),
    ];

    let mut widths = vec![Constraint::Length(LABEL_WIDTH)];
    widths.extend(vec![Constraint::Ratio(1, slice.len() as u32); slice.len()]);
    let table = Table::new(rows, widths)
        .column_spacing(1)
        .style(panel_style(theme));
    frame.render_widget(table, inner);
}

pub(crate) fn visible_slice(hourly: &[HourlyPoint], offset: usize, width: u16) -> &[HourlyPoint] {
    let start = offset.min(hourly.len());
    let end = (start + visible_hour_count(width)).min(hourly.len());
    &hourly[start..end]
}

fn label_cell(label: &'static str, theme: Theme) -> Cell<'static> {
    Cell::from(label).style(Style::default().fg(theme.muted_text))
}

fn build_time_row(slice: &[HourlyPoint], theme: Theme) -> Row<'static> {
    let mut cells = vec![label_cell("Time", theme)];
    cells.extend(slice.iter().map(|hour| {
        Cell::from(hour.time_label.clone()).style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    }));
    Row::new(cells)
}

fn build_icon_row(slice: &[HourlyPoint], icon_mode: IconMode, theme: Theme) -> Row<'static> {
    let mut cells = vec![label_cell("", theme)];
    cells.extend(slice.iter().map(|hour| {
        Cell::from(hour.condition.icon(icon_mode))
            .style(Style::default().fg(icon_color(&theme, hour.condition.category())))
    }));
    Row::new(cells)
}

fn build_temp_row(slice: &[HourlyPoint], theme: Theme) -> Row<'static> {
    let mut cells = vec![label_cell("Temp", theme)];
    cells.extend(slice.iter().map(|hour| {
        Cell::from(format!("{}°", hour.temp)).style(Style::default().fg(temp_color(&theme, hour.temp)))
    }));
    Row::new(cells)
}

fn build_probability_row(slice: &[HourlyPoint], theme: Theme) -> Row<'static> {
    let mut cells = vec![label_cell("Rain", theme)];
    cells.extend(slice.iter().map(|hour| {
        Cell::from(format!("{}%", hour.precipitation_probability))
            .style(Style::default().fg(theme.info))
    }));
    Row::new(cells)
}

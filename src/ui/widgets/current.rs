use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    domain::weather::WeatherSnapshot,
    ui::{
        theme::{Theme, icon_color, temp_color},
        widgets::panel_block,
    },
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    current: &WeatherSnapshot,
    theme: Theme,
) {
    let block = panel_block("Now", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let category = current.condition.category();
    let headline = Line::from(vec![
        Span::styled(
            format!("{} ", current.condition.icon(state.icon_mode)),
            Style::default().fg(icon_color(&theme, category)),
        ),
        Span::styled(
            format!("{}°C", current.temp),
            Style::default()
                .fg(temp_color(&theme, current.temp))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(current.condition_label(), Style::default().fg(theme.accent)),
    ]);
    let lines = vec![
        headline,
        Line::from(Span::styled(
            current.description.clone(),
            Style::default().fg(theme.text),
        )),
        metric_line("Feels like", format!("{}°C", current.feels_like), theme),
        metric_line("Wind", format!("{} km/h", current.wind_speed), theme),
        metric_line("Humidity", format!("{}%", current.humidity), theme),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn metric_line(label: &'static str, value: String, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<11}"), Style::default().fg(theme.muted_text)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

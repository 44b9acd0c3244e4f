use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::state::AppState, domain::weather::LoadedForecast, ui::theme::Theme};

pub const KEY_HINTS: &str = "←/→ scroll  r refresh  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, loaded: &LoadedForecast, theme: Theme) {
    let location = &state.location;
    let title = Line::from(vec![
        Span::styled(
            location.name,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", location.region),
            Style::default().fg(theme.muted_text),
        ),
    ]);
    let meta = Line::from(vec![
        Span::styled(
            format!("Last updated {}", loaded.updated_label()),
            Style::default().fg(theme.muted_text),
        ),
        Span::raw("   "),
        Span::styled(KEY_HINTS, Style::default().fg(theme.muted_text)),
    ]);
    frame.render_widget(Paragraph::new(vec![title, meta]), area);
}

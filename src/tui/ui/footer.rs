use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{Dashboard, InputMode};

pub fn render(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = match app.mode {
        InputMode::Insert => Line::from(vec![
            Span::styled(
                " filter: ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                app.filter_text.clone(),
                Style::default().fg(theme.text_primary),
            ),
            Span::styled("\u{2588}", Style::default().fg(theme.accent)),
            Span::styled(
                "  Esc/Enter back to normal mode",
                Style::default().fg(theme.text_secondary),
            ),
        ]),
        InputMode::Normal => {
            let mut spans = vec![hint("q", "Quit", app), hint("j/k", "Navigate", app)];
            spans.push(hint("i", "Filter", app));
            spans.push(hint("r", "Refresh", app));
            if !app.filter_text.is_empty() {
                spans.push(Span::styled(
                    format!("  filter: {}", app.filter_text),
                    Style::default().fg(theme.text_secondary),
                ));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line), inner);
}

fn hint(key: &str, desc: &str, app: &Dashboard) -> Span<'static> {
    Span::styled(
        format!(" {key} {desc} \u{2502}"),
        Style::default().fg(app.theme.text_secondary),
    )
}

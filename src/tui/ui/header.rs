use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{Dashboard, InputMode};

pub fn render(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let theme = &app.theme;
    let mode_label = match app.mode {
        InputMode::Normal => "NORMAL",
        InputMode::Insert => "INSERT",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" Mode: {mode_label} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(
            " hostdeck ",
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.hostname.as_str(),
            Style::default().fg(theme.text_primary),
        ),
        Span::raw("  "),
        Span::styled(
            format!("CPU {:.0}%", app.cpu_usage),
            Style::default().fg(theme.text_secondary),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Procs: {}", app.process_count),
            Style::default().fg(theme.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

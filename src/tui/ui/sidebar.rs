use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{Dashboard, Tab};

pub fn render(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .title(Span::styled(
            " Navigation ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            if index == app.selected_tab {
                Line::from(Span::styled(
                    format!("> {}", tab.label()),
                    Style::default()
                        .fg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", tab.label()),
                    Style::default().fg(theme.text_secondary),
                ))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

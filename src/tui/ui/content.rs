use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Row, Table};

use crate::format::{format_bytes, format_gib, format_uptime};
use crate::tui::app::{Dashboard, Tab};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let block = panel_block(&app.theme, app.current_tab().label());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.current_tab() {
        Tab::Overview => render_overview(frame, inner, app),
        Tab::Processes => render_processes(frame, inner, app),
        Tab::Disks => render_disks(frame, inner, app),
        Tab::Network => render_network(frame, inner, app),
        Tab::Sensors => render_sensors(frame, inner, app),
    }
}

fn panel_block(theme: &Theme, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_overview(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let ram_ratio = if app.memory_total > 0 {
        (app.memory_used as f64 / app.memory_total as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    " RAM ",
                    Style::default().fg(theme.text_secondary),
                )),
        )
        .gauge_style(
            Style::default()
                .fg(theme.gauge_filled)
                .bg(theme.gauge_unfilled),
        )
        .ratio(ram_ratio)
        .label(format!(
            "{}/{} ({:.0}%)",
            format_bytes(app.memory_used),
            format_bytes(app.memory_total),
            ram_ratio * 100.0
        ));
    frame.render_widget(gauge, chunks[0]);

    let lines = vec![
        overview_line("Host", app.hostname.clone(), theme),
        overview_line("CPU usage", format!("{:.1}%", app.cpu_usage), theme),
        overview_line("Processes", app.process_count.to_string(), theme),
        overview_line("Uptime", format_uptime(app.uptime_secs), theme),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

fn overview_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<10}"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(theme.text_primary)),
    ])
}

fn render_processes(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let theme = &app.theme;
    let rows: Vec<Row> = app
        .filtered_processes()
        .into_iter()
        .map(|record| {
            Row::new(vec![
                record.pid.to_string(),
                record.name.clone(),
                format!("{:.2}%", record.memory_percent),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["PID", "Name", "Mem %"]).style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .style(Style::default().fg(theme.text_primary));

    frame.render_widget(table, area);
}

fn render_disks(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let theme = &app.theme;
    let rows: Vec<Row> = app
        .disks
        .iter()
        .map(|disk| {
            Row::new(vec![
                disk.mount_point.clone(),
                format_gib(disk.total_bytes),
                format_gib(disk.used_bytes),
                format_gib(disk.available_bytes),
                format!("{:.1}%", disk.percent_used()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Mount", "Total", "Used", "Free", "Usage"]).style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .style(Style::default().fg(theme.text_primary));

    frame.render_widget(table, area);
}

fn render_network(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let lines = vec![
        overview_line("Hostname", app.network.hostname.clone(), theme),
        overview_line("Address", app.network.address.clone(), theme),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let rows: Vec<Row> = app
        .network
        .interfaces
        .iter()
        .map(|interface| {
            Row::new(vec![
                interface.name.clone(),
                format_bytes(interface.received),
                format_bytes(interface.transmitted),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(14),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(vec!["Interface", "Received", "Transmitted"]).style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .style(Style::default().fg(theme.text_primary));

    frame.render_widget(table, chunks[1]);
}

fn render_sensors(frame: &mut Frame, area: Rect, app: &Dashboard) {
    let theme = &app.theme;
    if app.sensors.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " No temperature sensors found.",
                Style::default().fg(theme.warn),
            ))),
            area,
        );
        return;
    }

    let lines: Vec<Line> = app
        .sensors
        .iter()
        .map(|reading| {
            overview_line(
                "Sensor",
                format!("{}: {:.1}\u{b0}C", reading.display_name(), reading.celsius),
                theme,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

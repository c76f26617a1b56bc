pub mod content;
pub mod footer;
pub mod header;
pub mod sidebar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::tui::app::Dashboard;

pub fn draw(frame: &mut Frame, app: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(chunks[1]);

    header::render(frame, chunks[0], app);
    sidebar::render(frame, body[0], app);
    content::render(frame, body[1], app);
    footer::render(frame, chunks[2], app);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::Config;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                let cell = buf.cell((x, y)).unwrap();
                out.push_str(cell.symbol());
            }
            if y + 1 < area.height {
                out.push('\n');
            }
        }
        out
    }

    fn render_full(app: &Dashboard) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn draws_sidebar_tabs_and_branding() {
        let app = Dashboard::new(&Config::default());
        let output = render_full(&app);
        assert!(output.contains("hostdeck"));
        assert!(output.contains("Overview"));
        assert!(output.contains("Processes"));
        assert!(output.contains("Sensors"));
        assert!(output.contains("NORMAL"));
    }

    #[test]
    fn selected_tab_is_marked() {
        let mut app = Dashboard::new(&Config::default());
        app.selected_tab = 1;
        let output = render_full(&app);
        assert!(output.contains("> Processes"));
    }
}

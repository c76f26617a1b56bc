use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{Config, parse_key};
use crate::telemetry::collector::Collector;
use crate::telemetry::snapshot::{DiskUsage, NetworkInfo, ProcessRecord, SensorReading};
use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Processes,
    Disks,
    Network,
    Sensors,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Processes,
        Tab::Disks,
        Tab::Network,
        Tab::Sensors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Processes => "Processes",
            Tab::Disks => "Disks",
            Tab::Network => "Network",
            Tab::Sensors => "Sensors",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    EnterInsert,
    LeaveInsert,
    FilterChar(char),
    FilterBackspace,
    Refresh,
    None,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub nav_down: KeyCode,
    pub nav_up: KeyCode,
    pub insert: KeyCode,
    pub refresh: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            nav_down: parse_key(&kb.nav_down).unwrap_or(KeyCode::Char('j')),
            nav_up: parse_key(&kb.nav_up).unwrap_or(KeyCode::Char('k')),
            insert: parse_key(&kb.insert).unwrap_or(KeyCode::Char('i')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
        }
    }
}

/// State of the full-screen variant. All mutation happens in `dispatch`,
/// in response to a validated input event or a tick.
pub struct Dashboard {
    pub running: bool,
    pub selected_tab: usize,
    pub mode: InputMode,
    pub filter_text: String,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
    pub collector: Collector,
    pub hostname: String,
    pub cpu_usage: f32,
    pub memory_used: u64,
    pub memory_total: u64,
    pub process_count: usize,
    pub uptime_secs: u64,
    pub processes: Vec<ProcessRecord>,
    pub disks: Vec<DiskUsage>,
    pub network: NetworkInfo,
    pub sensors: Vec<SensorReading>,
    process_rows: usize,
}

impl Dashboard {
    pub fn new(config: &Config) -> Self {
        let collector = Collector::new();
        let network = collector.network_info();
        let mut dashboard = Dashboard {
            running: true,
            selected_tab: 0,
            mode: InputMode::Normal,
            filter_text: String::new(),
            theme: Theme::from_config(&config.colors.theme),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            collector,
            hostname: network.hostname.clone(),
            cpu_usage: 0.0,
            memory_used: 0,
            memory_total: 0,
            process_count: 0,
            uptime_secs: 0,
            processes: Vec::new(),
            disks: Vec::new(),
            network,
            sensors: Vec::new(),
            process_rows: config.general.top_process_count.max(20),
        };
        dashboard.refresh_data();
        dashboard
    }

    pub fn refresh_data(&mut self) {
        self.processes = self.collector.processes_by_memory(self.process_rows);
        self.cpu_usage = self.collector.cpu_usage();
        self.memory_used = self.collector.memory_used();
        self.memory_total = self.collector.memory_total();
        self.process_count = self.collector.process_count();
        self.uptime_secs = Collector::uptime();
        self.disks = self.collector.disks();
        self.network = self.collector.network_info();
        self.sensors = self.collector.temperatures();
    }

    pub fn current_tab(&self) -> Tab {
        Tab::ALL[self.selected_tab % Tab::ALL.len()]
    }

    /// Processes visible on the Processes tab after the insert-mode filter.
    pub fn filtered_processes(&self) -> Vec<&ProcessRecord> {
        let needle = self.filter_text.to_lowercase();
        self.processes
            .iter()
            .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Insert => self.map_key_insert(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        // Arrow keys stay hardwired alongside the configurable binds
        if code == KeyCode::Down {
            return Action::NavDown;
        }
        if code == KeyCode::Up {
            return Action::NavUp;
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.nav_down {
            return Action::NavDown;
        }
        if code == kb.nav_up {
            return Action::NavUp;
        }
        if code == kb.insert {
            return Action::EnterInsert;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }

        Action::None
    }

    fn map_key_insert(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::LeaveInsert,
            KeyCode::Backspace => Action::FilterBackspace,
            KeyCode::Char(c) => Action::FilterChar(c),
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::NavDown => {
                self.selected_tab = (self.selected_tab + 1) % Tab::ALL.len();
            }
            Action::NavUp => {
                self.selected_tab = (self.selected_tab + Tab::ALL.len() - 1) % Tab::ALL.len();
            }
            Action::EnterInsert => {
                self.mode = InputMode::Insert;
            }
            Action::LeaveInsert => {
                self.mode = InputMode::Normal;
            }
            Action::FilterChar(c) => {
                self.filter_text.push(c);
            }
            Action::FilterBackspace => {
                self.filter_text.pop();
            }
            Action::Refresh => self.refresh_data(),
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dashboard() -> Dashboard {
        Dashboard::new(&Config::default())
    }

    #[test]
    fn nav_keys_wrap_around_the_sidebar() {
        let mut app = test_dashboard();
        assert_eq!(app.current_tab(), Tab::Overview);

        for _ in 0..Tab::ALL.len() {
            app.dispatch(Action::NavDown);
        }
        assert_eq!(app.current_tab(), Tab::Overview);

        app.dispatch(Action::NavUp);
        assert_eq!(app.current_tab(), Tab::Sensors);
    }

    #[test]
    fn default_keybinds_map_to_actions() {
        let app = test_dashboard();

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::NavDown);

        let key = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::EnterInsert);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(key), Action::Quit);
    }

    #[test]
    fn insert_mode_collects_filter_text() {
        let mut app = test_dashboard();
        app.dispatch(Action::EnterInsert);
        assert_eq!(app.mode, InputMode::Insert);

        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::FilterChar('s'));
        app.dispatch(Action::FilterChar('s'));
        app.dispatch(Action::FilterChar('h'));
        assert_eq!(app.filter_text, "sh");

        app.dispatch(Action::FilterBackspace);
        assert_eq!(app.filter_text, "s");

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::LeaveInsert);
        app.dispatch(Action::LeaveInsert);
        assert_eq!(app.mode, InputMode::Normal);
    }

    #[test]
    fn normal_mode_ignores_unbound_keys() {
        let app = test_dashboard();
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);
    }

    #[test]
    fn filter_narrows_the_process_table() {
        let mut app = test_dashboard();
        app.processes = vec![
            ProcessRecord {
                pid: 1,
                name: "systemd".to_string(),
                memory_percent: 1.0,
            },
            ProcessRecord {
                pid: 2,
                name: "bash".to_string(),
                memory_percent: 0.5,
            },
        ];
        app.filter_text = "sys".to_string();
        let visible = app.filtered_processes();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "systemd");
    }
}

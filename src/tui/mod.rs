pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

use std::time::Duration;

use color_eyre::Result;
use crossterm::event::KeyEventKind;

use crate::config::Config;
use crate::session::FAREWELL;
use self::app::Dashboard;
use self::event::{Event, EventHandler};

/// The alternate full-screen navigable variant: sidebar of telemetry tabs,
/// normal/insert modes, tick-driven refresh.
pub async fn run(config: Config) -> Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config).await;

    ratatui::restore();
    println!("{FAREWELL}");
    result
}

async fn run_loop(terminal: &mut ratatui::DefaultTerminal, config: Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms);
    let mut app = Dashboard::new(&config);
    let mut events = EventHandler::new(tick_rate);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        let action = app.map_key(key);
                        app.dispatch(action);
                    }
                }
                Event::Tick => app.refresh_data(),
                Event::Resize => {}
            }
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    Ok(())
}

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use snapdeck_core::{AppConfig, Deck};
use snapdeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    widgets::{
        DotsWidget, MenuWidget, NavBarWidget, ProgressBarWidget, SectionViewWidget,
        StatusBarWidget,
    },
    Theme,
};

type Backend = CrosstermBackend<io::Stdout>;

pub fn run(config: &AppConfig, path: &Path) -> Result<()> {
    let deck = Deck::load(path).with_context(|| format!("failed to load deck {}", path.display()))?;
    let keymap = Keymap::from_config(&config.keymap);
    let theme = Theme::by_name(&config.ui.theme);
    let mut app = App::new(deck, config, theme)?;

    info!(deck = %path.display(), "starting presentation");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = if app.deck.title.is_empty() {
        "snapdeck".to_string()
    } else {
        format!("{} - snapdeck", app.deck.title)
    };
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::with_animation_rate(
        config.ui.tick_rate_ms,
        app.navigator.host().animator().frame_interval(),
    );

    let result = run_loop(&mut terminal, &mut app, &events, &keymap);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("presentation closed");
    result
}

fn run_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    events: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| {
            let area = frame.area();
            let layout = app.update_layout(area);
            let app = &*app;

            NavBarWidget::render(frame, layout.nav, app);
            ProgressBarWidget::render(frame, layout.progress, app);
            SectionViewWidget::render(frame, layout.body, app);
            if let Some(dots) = layout.dots {
                DotsWidget::render(frame, dots, app);
            }
            StatusBarWidget::render(frame, layout.status, app);

            if app.menu.open {
                MenuWidget::render(frame, area, app);
            }
        })?;

        // Poll faster while a transition is running
        let event = if app.needs_fast_update() {
            events.next_animation()?
        } else {
            events.next()?
        };

        match event {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app.menu.open, keymap);
                app.handle_action(action);
            }
            Some(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse),
            // Layout is recomputed on the next draw
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

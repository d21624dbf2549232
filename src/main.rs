use poolwatch::app::{App, AppMessage};
use poolwatch::cli::{run_list, run_show, Cli, CliCommand};
use poolwatch::config::Config;
use poolwatch::gateway::HttpPoolGateway;
use poolwatch::logging;
use poolwatch::state::PoolsStore;
use poolwatch::ui;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Frame interval; drives the spinner and the toast timer.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = cli.config()?;
    let runtime = Runtime::new()?;

    match cli.command {
        Some(command) => {
            logging::init_stderr_logging()?;
            runtime.block_on(run_command(command, config))
        }
        None => run_tui(config, &runtime),
    }
}

async fn run_command(command: CliCommand, config: Config) -> Result<()> {
    let gateway = Arc::new(HttpPoolGateway::from_config(&config));
    let mut store = PoolsStore::with_fencing(gateway, config.fencing);
    let mut stdout = io::stdout().lock();

    match command {
        CliCommand::List(args) => run_list(&mut store, &args, &mut stdout).await,
        CliCommand::Show(args) => run_show(&mut store, &args, &mut stdout).await,
    }
}

fn run_tui(config: Config, runtime: &Runtime) -> Result<()> {
    if let Some(path) = config.log_path() {
        match logging::init_file_logging(&path) {
            Ok(path) => info!("Logging to {}", path.display()),
            Err(e) => eprintln!("poolwatch: logging disabled ({}): {}", path.display(), e),
        }
    }
    info!(
        "Starting poolwatch against {} (fencing {})",
        config.api_base_url, config.fencing
    );

    install_panic_hook();
    let mut terminal = enter_terminal()?;

    let gateway = Arc::new(HttpPoolGateway::from_config(&config));
    let mut app = App::new(config, gateway);
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(async {
        app.refresh_pools();
        event_loop(&mut terminal, &mut app).await
    });

    leave_terminal()?;
    terminal.show_cursor()?;
    result
}

fn enter_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn leave_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show)
}

/// Put the terminal back before the default hook prints the panic.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = leave_terminal();
        previous(panic_info);
    }));
}

fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Resize(width, height) => app.update_terminal_dimensions(width, height),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            app.handle_key(key);
            app.mark_dirty();
        }
        Event::Mouse(mouse) => app.handle_mouse(mouse),
        _ => {}
    }
}

async fn next_message(rx: &mut Option<UnboundedReceiver<AppMessage>>) -> Option<AppMessage> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

async fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();
    // The loop owns the receiver; spawned fetches hold senders
    let mut messages = app.message_rx.take();

    while !app.should_quit {
        if app.needs_redraw || app.is_animating() {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => app.tick(),

            event = events.next() => match event {
                Some(Ok(event)) => handle_event(app, event),
                Some(Err(e)) => warn!("Terminal event error: {}", e),
                None => {
                    warn!("Terminal event stream closed");
                    app.quit();
                }
            },

            Some(msg) = next_message(&mut messages) => app.handle_message(msg),
        }
    }

    info!("Quitting");
    Ok(())
}

use std::io;
use std::sync::Arc;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use folio::app::{App, AppMessage, TICK_MS};
use folio::relay::{EmailJsClient, EmailTransport, SimulatedRelay};
use folio::{storage, ui};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("folio {} - a personal portfolio for the terminal", VERSION);
    println!();
    println!("USAGE:");
    println!("    folio [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --simulate    Simulate contact-form delivery instead of calling the relay");
    println!("    --version     Print version information");
    println!("    --help        Print this help");
}

/// Log to a file under the config directory; stdout belongs to the TUI.
fn init_tracing() -> Result<()> {
    let path = storage::config_dir()?.join("folio.log");
    let file = std::fs::File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_MS));

        tokio::select! {
            // Tick drives animations and timed dismissals
            _ = timeout => {
                app.tick();
            }

            // Terminal events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Key(key) => app.handle_key(key),
                        Event::Mouse(mouse) => app.handle_mouse(mouse),
                        Event::Paste(text) => app.handle_paste(&text),
                        Event::Resize(_, _) => app.mark_dirty(),
                        _ => {}
                    }
                }
            }

            // Results of async work (the relay send)
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("folio {}", VERSION);
        return Ok(());
    }
    let simulate = args.iter().any(|a| a == "--simulate");

    init_tracing()?;
    tracing::info!(version = VERSION, simulate, "starting folio");

    let transport: Arc<dyn EmailTransport> = if simulate {
        Arc::new(SimulatedRelay::new())
    } else {
        Arc::new(EmailJsClient::new())
    };
    let mut app = App::with_transport(transport);
    app.theme = storage::load_theme();

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal)?;

    result
}

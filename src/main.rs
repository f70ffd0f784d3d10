use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::buffer::Buffer;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::time::Instant;

use saber::app::{App, poll_event};
use saber::config::{self, ConfigResult};
use saber::dialog::TerminalDialogs;
use saber::pages::Page;

/// Saber+ Gestor: school quiz dashboard for the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Saber+ Gestor: a terminal dashboard for teachers with toast notifications"
)]
struct Args {
    /// Page to open on startup (dashboard, meusquizzes, turmas, relatorios, forum)
    #[arg(long, short)]
    page: Option<Page>,

    /// Print the navigation items and their routes, then exit
    #[arg(long)]
    list_pages: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/saber-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/saber-debug.log")
            .expect("Failed to open /tmp/saber-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SABER DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();

    let args = Args::parse();

    if args.list_pages {
        for page in Page::ALL {
            println!("{}\t{}", page.label(), page.route());
        }
        return Ok(());
    }

    let start_page = args.page.unwrap_or(config_result.config.startup.page);

    let terminal = init_terminal()?;
    let app = App::new(&config_result.config, start_page);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SABER DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    // Last drawn frame, shown behind modal dialogs
    let mut backdrop = Buffer::default();

    {
        let mut dialogs = TerminalDialogs::new(&mut terminal, &backdrop);
        app.start(&mut dialogs, Instant::now());
    }

    if let Some(warning) = config_result.warning {
        app.notification.show_error(&warning);
    }

    loop {
        {
            let mut dialogs = TerminalDialogs::new(&mut terminal, &backdrop);
            app.tick(Instant::now(), &mut dialogs);
        }

        if app.should_quit() {
            break;
        }

        if app.should_render() {
            let completed = terminal.draw(|frame| app.render(frame, Instant::now()))?;
            backdrop = completed.buffer.clone();
            app.clear_dirty();
        }

        if let Some(event) = poll_event(app.poll_timeout(Instant::now()))? {
            let mut dialogs = TerminalDialogs::new(&mut terminal, &backdrop);
            app.handle_event(event, &mut dialogs, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

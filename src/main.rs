// algotrace: step through recorded algorithm executions

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Builder, Env};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};

use algotrace::algorithms::problems::run;
use algotrace::cli::{Cli, catalogue};
use algotrace::config::OutputMode;
use algotrace::report;
use algotrace::ui::App;

fn init_logger() {
    // RUST_LOG wins; otherwise stay quiet so the TUI screen is not disturbed
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let cli = Cli::parse();

    if cli.list {
        print!("{}", catalogue());
        return Ok(());
    }

    let request = match cli.request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    let config = cli.config();

    let algorithm_run = match run(request) {
        Ok(algorithm_run) => algorithm_run,
        Err(e) => {
            error!("run failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "{} finished with {} snapshot(s) in {:?}",
        algorithm_run.problem,
        algorithm_run.snapshots.len(),
        algorithm_run.elapsed
    );

    match config.output {
        OutputMode::Text => {
            print!("{}", report::text(&algorithm_run));
            return Ok(());
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&report::json(&algorithm_run))?);
            return Ok(());
        }
        OutputMode::Tui => {}
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(algorithm_run, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

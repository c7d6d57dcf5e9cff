// Sortty: step-by-step sorting algorithm visualizer

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use clap::Parser;
use sortty::algorithms::Algorithm;
use sortty::config::{Cli, Config, Mode};
use sortty::snapshot::StepHistory;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // clap prints help, version and parse errors itself and exits
    let cli = Cli::parse();

    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Try 'sortty --help' for usage.");
            std::process::exit(1);
        }
    };

    match config.mode {
        Mode::List => {
            for algorithm in Algorithm::ALL {
                println!("{}", algorithm);
            }
            Ok(())
        }
        Mode::Print => print_steps(&config),
        Mode::Tui => run_tui(config),
    }
}

/// Sort once and write every step to stdout
fn print_steps(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut array = config.initial_array(&mut config.rng());
    eprintln!("Input: {:?}", array);

    let steps = match config.algorithm.sort(&mut array) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0;
    for step in steps {
        writeln!(out, "{}", step)?;
        count += 1;
    }
    out.flush()?;

    eprintln!("Total steps: {}", count);
    eprintln!("Sorted: {:?}", array);
    Ok(())
}

fn run_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!(
        "Sorting {} values with {}...",
        config.values.as_ref().map_or(config.array_size, Vec::len),
        config.algorithm
    );

    let mut app = App::new(config);
    match &app.history {
        Ok(history) => report_history(history),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Entering TUI; press r for a new array or a to switch algorithm.");
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

fn report_history(history: &StepHistory) {
    eprintln!("Total steps: {}", history.len());
    if let Some(last) = history.last() {
        eprintln!("Final step: {}", last);
    }
    eprintln!(
        "Snapshot memory: {} of {} bytes",
        history.memory_usage(),
        history.memory_limit()
    );
}

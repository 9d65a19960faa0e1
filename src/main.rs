// sortty: step-through sorting algorithm visualizer for the terminal

mod playback;
mod snapshot;
mod trace;
mod ui;
mod views;

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use playback::player::{Player, DEFAULT_SPEED_MS};
use playback::sequence;
use trace::Algorithm;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("sortty")
        .to_string();

    let mut algorithm = Algorithm::Bubble;
    let mut size = sequence::DEFAULT_SIZE;
    let mut custom: Option<Vec<i64>> = None;
    let mut speed_ms = DEFAULT_SPEED_MS;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage(&program_name);
                return Ok(());
            }
            "--algorithm" => {
                i += 1;
                let name = flag_value(&args, i, "--algorithm");
                match parse_algorithm(name) {
                    Some(parsed) => algorithm = parsed,
                    None => {
                        eprintln!("Error: Unknown algorithm '{}'", name);
                        eprintln!("Expected one of: bubble, insertion, merge");
                        process::exit(1);
                    }
                }
            }
            "--size" => {
                i += 1;
                let raw = flag_value(&args, i, "--size");
                match raw.parse::<usize>() {
                    Ok(n) => size = n.clamp(sequence::MIN_SIZE, sequence::MAX_SIZE),
                    Err(_) => {
                        eprintln!("Error: --size expects a number, got '{}'", raw);
                        process::exit(1);
                    }
                }
            }
            "--sequence" => {
                i += 1;
                let raw = flag_value(&args, i, "--sequence");
                let values = sequence::parse_sequence(raw);
                if values.is_empty() {
                    eprintln!("Error: No numbers found in '{}'", raw);
                    process::exit(1);
                }
                custom = Some(values);
            }
            "--speed" => {
                i += 1;
                let raw = flag_value(&args, i, "--speed");
                match raw.parse::<u64>() {
                    Ok(ms) => speed_ms = ms,
                    Err(_) => {
                        eprintln!("Error: --speed expects milliseconds, got '{}'", raw);
                        process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Error: Unknown option '{}'", other);
                eprintln!();
                print_usage(&program_name);
                process::exit(1);
            }
        }
        i += 1;
    }

    let base = custom.unwrap_or_else(|| sequence::random_sequence(size));

    // Build the full trace up front
    eprintln!("Preparing {} trace over {} values...", algorithm.name(), base.len());
    let mut player = Player::new(algorithm, base);
    player.set_speed(speed_ms);
    eprintln!("Trace ready: {} steps.", player.trace_len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(player);
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

/// Fetch the value following a flag, exiting with a message when missing
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: {} needs a value", flag);
            process::exit(1);
        }
    }
}

/// Accept algorithm names leniently: `bubble`, `Insertion Sort`, `merge`...
fn parse_algorithm(name: &str) -> Option<Algorithm> {
    let name = name.to_lowercase();
    if name.starts_with("bubble") {
        Some(Algorithm::Bubble)
    } else if name.starts_with("insert") {
        Some(Algorithm::Insertion)
    } else if name.starts_with("merge") {
        Some(Algorithm::Merge)
    } else {
        None
    }
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --algorithm <name>   bubble | insertion | merge (default: bubble)");
    eprintln!(
        "  --size <n>           array size, {} to {} (default: {})",
        sequence::MIN_SIZE,
        sequence::MAX_SIZE,
        sequence::DEFAULT_SIZE
    );
    eprintln!("  --sequence <csv>     comma-separated start values, overrides --size");
    eprintln!(
        "  --speed <ms>         autoplay milliseconds per step (default: {})",
        DEFAULT_SPEED_MS
    );
    eprintln!("  --help               show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --algorithm merge --size 40", program_name);
    eprintln!("  {} --sequence 9,3,7,1,5 --speed 250", program_name);
}

// algotrace: step-by-step algorithm traces in the terminal

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use algotrace::algorithms::{AlgorithmInput, Category, InputKind, Registry};
use algotrace::config::Config;
use algotrace::session::Session;
use algotrace::ui::App;

#[derive(Parser, Debug)]
#[command(
    name = "algotrace",
    about = "Step through classic algorithms in the terminal",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Algorithm to start with, by exact name (see --list)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// List available algorithms and exit
    #[arg(long)]
    list: bool,

    /// Print the recorded trace as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Check that replaying the trace's mutations rebuilds the result, then exit
    #[arg(long)]
    verify: bool,

    /// Seed for random input generation
    #[arg(long)]
    seed: Option<u64>,

    /// Length of generated arrays
    #[arg(long, value_parser = clap::value_parser!(u16).range(0..=500))]
    size: Option<u16>,

    /// Comma-separated array to use instead of random input
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    array: Option<Vec<i64>>,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    speed_ms: Option<u64>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let registry = Registry::standard();
    if cli.list {
        for category in Category::ALL {
            println!("{}:", category);
            for algo in registry.by_category(category) {
                println!("  {:<28} {} time, {} space", algo.name, algo.complexity.time, algo.complexity.space);
            }
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(seed) = cli.seed {
        config.input.seed = Some(seed);
    }
    if let Some(size) = cli.size {
        config.input.array_len = usize::from(size);
    }
    if let Some(ms) = cli.speed_ms {
        config.interval_ms = ms;
    }
    if cli.algorithm.is_some() {
        config.algorithm = cli.algorithm.clone();
    }
    config.validate()?;

    let mut session = Session::new(registry, config)?;
    if let Some(values) = cli.array {
        if session.algorithm().input != InputKind::Array {
            return Err(format!("{} does not take an array", session.algorithm().name).into());
        }
        session.set_input(AlgorithmInput::Array(values))?;
    }

    if cli.dump {
        println!("{}", session.trace().to_json()?);
        return Ok(());
    }

    if cli.verify {
        return verify(&session);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
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

/// Replay the trace's swap/overwrite steps and compare with the reported array
fn verify(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let trace = session.trace();
    let name = trace.algorithm().name;
    let Some(expected) = trace.sorted_array() else {
        println!("{}: {} steps, no primary array to verify", name, trace.len());
        return Ok(());
    };

    // Searches report the array they searched, not a reordering of the input
    let replayed = match trace.algorithm().category {
        Category::Sorting => trace.replay_mutations(),
        _ => trace.array_at(trace.len().checked_sub(1)),
    };
    if replayed != expected {
        return Err(format!(
            "{}: replay produced {:?}, expected {:?}",
            name, replayed, expected
        )
        .into());
    }
    info!(algorithm = name, steps = trace.len(), "replay verified");
    println!("{}: {} steps, replay OK", name, trace.len());
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

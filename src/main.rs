use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use unicash::app::App;
use unicash::config::{UniCashPaths, UserPrefs};
use unicash::display;
use unicash::storage::UniCashStorage;

#[derive(Parser)]
#[command(
    name = "unicash",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "UniCash is a terminal-based finance tracker for managing personal \
                  income and expenses. Type commands at the prompt to record \
                  transactions, search them and summarize your spending. Type \
                  'help' at the prompt to see every command."
)]
struct Cli {
    /// Directory to keep UniCash data in
    #[arg(long, env = "UNICASH_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the register stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Initialize paths and preferences
    let paths = match cli.data_dir {
        Some(dir) => UniCashPaths::with_base_dir(dir),
        None => UniCashPaths::new()?,
    };
    let prefs = UserPrefs::load_or_default(&paths);
    let data_file = prefs.data_file(&paths);

    let mut app = App::new(UniCashStorage::new(data_file), prefs);
    app.model().prefs().save(&paths)?;

    println!("Welcome to UniCash!");
    println!();
    print!("{}", app.render_register());

    let mut stdin = io::stdin().lock();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        match app.execute(line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.exit {
                    break;
                }
                println!();
                if result.show_help {
                    print!("{}", display::format_help());
                } else {
                    print!("{}", app.render_register());
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

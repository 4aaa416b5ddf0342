use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use nanofin_core::categorize;
use nanofin_finance::{Analysis, analyze_file};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

mod config;
mod report;
mod state;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("NANOFIN_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "nanofin",
    version = VERSION,
    about = "Nano-entrepreneur credit scoring from JSON bank statements"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a statement and print the full report
    Analyze {
        /// Path to the JSON bank statement
        #[arg(long)]
        file: PathBuf,

        /// Print the analysis as JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Rows in the recent-transactions table (overrides config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Categorize one or more transaction descriptions
    Categorize {
        #[arg(required = true)]
        descriptions: Vec<String>,
    },

    /// Export categorized transactions as CSV
    Transactions {
        #[arg(long)]
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show the loan tier and marketplace offers for a statement
    Loans {
        #[arg(long)]
        file: PathBuf,
    },

    /// Write a default ~/.nanofin/config.toml
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { file, json, limit } => {
            let cfg = load_config_and_init_logging()?;
            let analysis = load_analysis(&file)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&analysis).context("serialize analysis")?
                );
            } else {
                let mut display = cfg.display.clone();
                if let Some(limit) = limit {
                    display.history_limit = limit;
                }
                print!("{}", report::render_report(&analysis, &display));
            }
        }

        Command::Categorize { descriptions } => {
            init_logging(&config::LogSection::default().level);
            for d in &descriptions {
                println!("{:<17} {}", categorize(d).as_str(), d);
            }
        }

        Command::Transactions { file, csv } => {
            load_config_and_init_logging()?;
            let analysis = load_analysis(&file)?;
            match csv {
                Some(out) => {
                    let f = File::create(&out)
                        .with_context(|| format!("create {}", out.display()))?;
                    report::write_transactions_csv(f, &analysis.transactions)?;
                    println!(
                        "Wrote {} transactions to {}",
                        analysis.transactions.len(),
                        out.display()
                    );
                }
                None => report::write_transactions_csv(io::stdout().lock(), &analysis.transactions)?,
            }
        }

        Command::Loans { file } => {
            let cfg = load_config_and_init_logging()?;
            let analysis = load_analysis(&file)?;
            println!("Score: {:.2}/100\n", analysis.score.score);
            print!(
                "{}",
                report::render_loans(analysis.score.score, &cfg.display.currency_symbol)
            );
        }

        Command::InitConfig => {
            init_logging(&config::LogSection::default().level);
            config::init_config()?;
        }
    }

    Ok(())
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config_and_init_logging() -> Result<config::Config> {
    let cfg = config::load_config()?;
    init_logging(&cfg.log.level);
    Ok(cfg)
}

fn load_analysis(path: &Path) -> Result<Analysis> {
    if !path.exists() {
        bail!("Statement not found: {} (pass --file <path>)", path.display());
    }
    log::info!("reading statement {}", path.display());
    analyze_file(path).with_context(|| format!("Error processing file {}", path.display()))
}

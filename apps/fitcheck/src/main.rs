use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitcheck::config::Config;
use fitcheck::errors::AppError;
use fitcheck::engine::{extract_keywords, score_fit, EngineConfig};
use fitcheck::models::lexicon::Lexicon;
use fitcheck::models::resume::load_resume_text;
use fitcheck::page::{FitPanel, TerminalSurface};

#[derive(Debug, Parser)]
#[command(name = "fitcheck", version, about = "Score a job description against a résumé")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON lexicon overriding the built-in stopwords, phrases and aliases.
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Weight whitelisted phrases higher than single terms.
    #[arg(long, global = true)]
    weighted: bool,

    #[arg(long, global = true)]
    max_terms: Option<usize>,

    #[arg(long, global = true)]
    display_limit: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a JD (file or stdin) against a résumé file.
    Score {
        #[arg(long)]
        resume: PathBuf,
        /// JD file; reads stdin when omitted.
        #[arg(long)]
        jd: Option<PathBuf>,
        /// Print the result as JSON instead of the panel.
        #[arg(long)]
        json: bool,
        /// Résumé section id to leave out of matching.
        #[arg(long)]
        exclude_section: Option<String>,
    },
    /// Print the ranked term set extracted from a JD.
    Extract {
        #[arg(long)]
        jd: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Read JD lines from stdin; `:run` scores, `:clear` resets, `:quit` exits.
    Interactive {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        exclude_section: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first; CLI flags override the environment.
    let mut config = Config::from_env()?;
    if let Some(path) = &cli.lexicon {
        config.lexicon_path = Some(path.clone());
    }
    if cli.weighted {
        config.weighted = true;
    }
    if let Some(max_terms) = cli.max_terms {
        config.max_terms = max_terms;
    }
    if let Some(display_limit) = cli.display_limit {
        config.display_limit = display_limit;
    }

    // Initialize structured logging on stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting fitcheck v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(cli.command, config) {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => error!(code = app_err.code(), "{err:#}"),
            None => error!("{err:#}"),
        }
        return Err(err);
    }

    Ok(())
}

fn run(command: Commands, config: Config) -> Result<()> {
    let lexicon = Arc::new(config.load_lexicon()?);
    let engine = config.engine_config();
    info!(
        max_terms = engine.max_terms,
        display_limit = engine.display_limit,
        mode = ?engine.mode,
        "Engine configured"
    );

    match command {
        Commands::Score {
            resume,
            jd,
            json,
            exclude_section,
        } => {
            let exclude = exclude_section.unwrap_or(config.exclude_section);
            let resume_text = load_resume_text(&resume, &exclude)?;
            let jd_text = read_jd(jd.as_deref())?;
            if jd_text.trim().is_empty() {
                warn!("JD text is empty; the fit score will be 0");
            }

            if json {
                let result = score_fit(&resume_text, &jd_text, &lexicon, &engine);
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let mut panel = FitPanel::new(
                    TerminalSurface::new(io::stdout()),
                    resume_text,
                    lexicon,
                    engine,
                );
                panel.set_jd(jd_text);
                panel.run()?;
            }
        }
        Commands::Extract { jd, json } => {
            let jd_text = read_jd(jd.as_deref())?;
            print_terms(&jd_text, &lexicon, &engine, json)?;
        }
        Commands::Interactive {
            resume,
            exclude_section,
        } => {
            let exclude = exclude_section.unwrap_or(config.exclude_section);
            let resume_text = load_resume_text(&resume, &exclude)?;
            run_interactive(resume_text, lexicon, engine)?;
        }
    }

    Ok(())
}

/// Reads the JD from a file, or from stdin when no path is given.
fn read_jd(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read JD from {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read JD from stdin")?;
            Ok(input)
        }
    }
}

fn print_terms(jd_text: &str, lexicon: &Lexicon, engine: &EngineConfig, json: bool) -> Result<()> {
    let terms = extract_keywords(jd_text, lexicon, engine);
    if json {
        println!("{}", serde_json::to_string_pretty(&terms)?);
        return Ok(());
    }
    for term in &terms {
        println!(
            "{} (words: {}, freq: {}, weight: {})",
            term.term, term.len, term.frequency, term.weight
        );
    }
    Ok(())
}

fn run_interactive(resume_text: String, lexicon: Arc<Lexicon>, engine: EngineConfig) -> Result<()> {
    let mut panel = FitPanel::new(TerminalSurface::new(io::stdout()), resume_text, lexicon, engine);

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match line.trim() {
            ":run" => {
                panel.run()?;
            }
            ":clear" => panel.clear()?,
            ":quit" => break,
            _ => panel.push_jd_line(&line),
        }
    }

    Ok(())
}

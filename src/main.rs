use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use boggle::{BoggleSolver, GridBoard};
use clap::Parser;
use log::{debug, info};

/// Find every dictionary word on a Boggle board.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one uppercase word per line
    dictionary: PathBuf,

    /// Board file: a "rows cols" header followed by the cells, with "Qu" for the Q die
    board: Option<PathBuf>,

    /// Print the score of this word instead of solving (repeatable)
    #[arg(long, value_name = "WORD")]
    score: Vec<String>,

    /// Print words sorted by length, then alphabetically, instead of in the order found
    #[arg(long)]
    sort: bool,

    /// Verbose/info output
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,
}

fn init_logging(args: &Args) {
    let level = if args.trace {
        Some(log::LevelFilter::Trace)
    } else if args.debug {
        Some(log::LevelFilter::Debug)
    } else if args.verbose {
        Some(log::LevelFilter::Info)
    } else {
        None
    };

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn load_dictionary(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading dictionary {}", path.display()))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn load_board(path: &Path) -> Result<GridBoard> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading board {}", path.display()))?;

    text.parse()
        .with_context(|| format!("parsing board {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let words = load_dictionary(&args.dictionary)?;
    info!("Loaded {} words from {}", words.len(), args.dictionary.display());

    let solver = BoggleSolver::new(&words)
        .with_context(|| format!("building dictionary from {}", args.dictionary.display()))?;

    if !args.score.is_empty() {
        for word in &args.score {
            let score = solver.score_of(word).with_context(|| format!("scoring {:?}", word))?;
            println!("{} {}", word, score);
        }
        return Ok(());
    }

    let board_path = args.board.as_deref().context("a board file is required unless --score is given")?;
    let board = load_board(board_path)?;
    debug!("Board:\n{}", board);

    let solution = solver.solve(&board)?;
    info!("{:?}", solution.statistics);

    let mut found = solution.words;
    if args.sort {
        found.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    }

    for word in &found {
        println!("{}", word);
    }
    println!("Score = {}", solver.total_score(&found)?);

    Ok(())
}

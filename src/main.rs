//! Weaver Solver CLI
//!
//! Command-line front end for the word-ladder search.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};
use weaver_solver::dictionary::{extract_word_list, write_word_list};
use weaver_solver::{
    all_neighbors, load_dictionary, sweep, Dictionary, LadderSolver, Limits, DEFAULT_WORD_LENGTH,
};

#[derive(Parser, Debug)]
#[command(name = "weaver-solver", version)]
#[command(about = "Find the shortest word ladder between two words")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a ladder from START to END, printing one word per line
    Solve {
        start: String,
        end: String,
        #[command(flatten)]
        dictionary: DictionaryArgs,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// List the dictionary words one letter away from WORD
    Neighbors {
        word: String,
        #[command(flatten)]
        dictionary: DictionaryArgs,
    },
    /// Solve from START to every dictionary word and summarize
    Sweep {
        start: String,
        #[command(flatten)]
        dictionary: DictionaryArgs,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Write every word of the given length from a raw word list
    Extract {
        /// Raw word list, one word per line
        #[arg(long, default_value = "/usr/share/dict/words")]
        source: PathBuf,
        /// Destination file
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,
    },
}

#[derive(Args, Debug)]
struct DictionaryArgs {
    /// Word list file; the bundled four-letter list is used when omitted
    #[arg(long, env = "WEAVER_DICTIONARY", value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Word length to keep when loading a word list file
    #[arg(long, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,
}

impl DictionaryArgs {
    fn load(&self) -> Result<Dictionary> {
        let dictionary = match &self.dictionary {
            Some(path) => Dictionary::from_path(path, self.length)
                .with_context(|| format!("loading dictionary from {}", path.display()))?,
            None => load_dictionary(),
        };
        info!(words = dictionary.len(), "dictionary ready");
        if dictionary.is_empty() {
            warn!("dictionary is empty; only start == end can be solved");
        }
        Ok(dictionary)
    }
}

#[derive(Args, Debug)]
struct LimitArgs {
    /// Give up after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<f64>,

    /// Give up after processing this many neighbors
    #[arg(long)]
    max_steps: Option<u64>,
}

impl LimitArgs {
    fn limits(&self) -> Limits {
        let mut limits = Limits::unlimited();
        if let Some(secs) = self.timeout {
            limits = limits.with_timeout_secs(secs);
        }
        if let Some(max_steps) = self.max_steps {
            limits = limits.with_max_steps(max_steps);
        }
        limits
    }
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stderr = io::stderr();
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "weaver_solver=debug"
    } else {
        "weaver_solver=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_solve(start: &str, end: &str, dictionary: &Dictionary, limits: Limits) -> Result<ExitCode> {
    let solver = LadderSolver::new(dictionary, limits);
    debug!(limits = ?solver.limits(), start, end, "solving");

    let started = Instant::now();
    let outcome = solver.solve(start, end);
    let elapsed = started.elapsed();

    match outcome {
        Ok(solution) => {
            info!(
                changes = solution.changes(),
                steps = solution.steps,
                expansions = solution.expansions,
                peak_frontier = solution.peak_frontier,
                ?elapsed,
                "ladder found"
            );
            let mut stdout = io::stdout().lock();
            for word in &solution.ladder {
                writeln!(stdout, "{word}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if err.is_budget_exhausted() {
                info!(?elapsed, "search stopped by limits");
            }
            eprintln!("No ladder found: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_neighbors(word: &str, dictionary: &Dictionary) -> Result<ExitCode> {
    let found = all_neighbors(dictionary, word);
    debug!(word, count = found.len(), "neighbors");
    let mut stdout = io::stdout().lock();
    for neighbor in found {
        writeln!(stdout, "{neighbor}")?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_sweep(start: &str, dictionary: &Dictionary, limits: Limits) -> Result<ExitCode> {
    println!("Sweeping from {} across {} words...", start, dictionary.len());

    let spinner = Spinner::new("Computing...");
    let started = Instant::now();
    let report = sweep(dictionary, start, limits);
    let elapsed = started.elapsed();
    spinner.stop();

    let total = report.entries.len().max(1);
    println!();
    println!("Ladder length distribution:");
    for (length, count) in report.length_distribution() {
        let pct = count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((count * 40 / total).max(1));
        println!("  {:>2} words: {:>5} ({:>5.1}%) {}", length, count, pct, bar);
    }
    println!();
    println!("Solved: {}", report.solved_count());
    println!("Unsolved: {}", report.unsolved_count());
    if report.budget_exhausted_count() > 0 {
        println!("  of which stopped by limits: {}", report.budget_exhausted_count());
    }
    if let Some(average) = report.average_length() {
        println!("Average ladder length: {:.3}", average);
    }
    if let Some((target, length)) = report.longest() {
        println!("Longest ladder: {} -> {} ({} words)", start, target, length);
    }
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(ExitCode::SUCCESS)
}

fn run_extract(source: &Path, output: &Path, length: usize) -> Result<ExitCode> {
    let reader = File::open(source)
        .map(BufReader::new)
        .with_context(|| format!("opening {}", source.display()))?;
    let words = extract_word_list(reader, length)
        .with_context(|| format!("reading {}", source.display()))?;

    let writer = File::create(output)
        .map(BufWriter::new)
        .with_context(|| format!("creating {}", output.display()))?;
    write_word_list(writer, &words).with_context(|| format!("writing {}", output.display()))?;

    info!(words = words.len(), output = %output.display(), "word list written");
    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Solve {
            start,
            end,
            dictionary,
            limits,
        } => run_solve(&start, &end, &dictionary.load()?, limits.limits()),
        Command::Neighbors { word, dictionary } => run_neighbors(&word, &dictionary.load()?),
        Command::Sweep {
            start,
            dictionary,
            limits,
        } => run_sweep(&start, &dictionary.load()?, limits.limits()),
        Command::Extract {
            source,
            output,
            length,
        } => run_extract(&source, &output, length),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

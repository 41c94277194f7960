//! Command-line entry point.
//!
//! Two modes: `--demo` runs the bundled sample dataset and prints the
//! assignment table; passing `--reviewers` and `--submissions` runs on
//! real files and writes the assignment CSV.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use review_match::assign::{AssignConfig, AssignRunner};
use review_match::load;
use review_match::report::{self, Summary};

const DEMO_REVIEWERS: &str = include_str!("../data/sample_reviewers.json");
const DEMO_SUBMISSIONS: &str = include_str!("../data/submissions.json");

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Transparent reviewer-to-paper matching for conference programs"
)]
struct Cli {
    /// Run on the bundled sample dataset and print the assignment table.
    #[arg(long)]
    demo: bool,

    /// Path to the reviewer roster JSON file.
    #[arg(long, value_name = "PATH", requires = "submissions")]
    reviewers: Option<PathBuf>,

    /// Path to the submissions JSON file.
    #[arg(long, value_name = "PATH", requires = "reviewers")]
    submissions: Option<PathBuf>,

    /// Target number of reviewers per paper.
    #[arg(long, value_name = "N", default_value_t = 3)]
    reviews_per_paper: usize,

    /// Where to write the assignment CSV (file mode only).
    #[arg(long, value_name = "PATH", default_value = "assignments.csv")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = AssignConfig::default().with_reviews_per_paper(cli.reviews_per_paper);
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    match (&cli.reviewers, &cli.submissions) {
        (Some(reviewers), Some(submissions)) if !cli.demo => {
            run_files(reviewers, submissions, &config, &cli.out)
        }
        _ => run_demo(&config),
    }
}

fn run_demo(config: &AssignConfig) -> anyhow::Result<()> {
    let reviewers =
        load::parse_reviewers(DEMO_REVIEWERS).context("parsing bundled reviewer data")?;
    let submissions =
        load::parse_submissions(DEMO_SUBMISSIONS).context("parsing bundled submission data")?;

    let result = AssignRunner::run(&reviewers, &submissions, config);

    let stdout = io::stdout();
    report::render_table(&mut stdout.lock(), &reviewers, &submissions, &result)?;
    Ok(())
}

fn run_files(
    reviewers_path: &Path,
    submissions_path: &Path,
    config: &AssignConfig,
    out: &Path,
) -> anyhow::Result<()> {
    let (reviewers, submissions) =
        load::load_dataset(reviewers_path, submissions_path).context("loading input data")?;

    let result = AssignRunner::run(&reviewers, &submissions, config);
    let summary = Summary::from_result(&result);

    report::write_csv_file(out, &result)
        .with_context(|| format!("writing {}", out.display()))?;
    info!(
        total_assigned = summary.total_assigned,
        papers_covered = summary.papers_covered,
        total_papers = summary.total_papers,
        mean_score = summary.mean_score,
        "assignment complete"
    );
    println!("Assignments written to {}", out.display());
    Ok(())
}

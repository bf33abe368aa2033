//! CLI definition.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use comlog_commit::{CommitRecord, FetchSession};
use comlog_export::CsvSink;
use comlog_github::{CommitFetcher, FetchOptions, GithubClient};

/// Default output file.
const DEFAULT_OUTPUT: &str = "github_commits.csv";

/// Export the commit history of a GitHub repository to a CSV file.
#[derive(Debug, Parser)]
#[command(name = "comlog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub repository owner
    #[arg(long)]
    pub owner: String,

    /// GitHub repository name
    #[arg(long)]
    pub repo: String,

    /// Branch name
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// GitHub personal access token (optional)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output CSV file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Commits requested per page
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: u32,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Fetches the commit history and writes it to the output file.
    pub fn run(self) -> Result<()> {
        debug!(
            owner = %self.owner,
            repo = %self.repo,
            branch = %self.branch,
            per_page = self.per_page,
            authenticated = self.token.is_some(),
            "starting fetch"
        );

        let client = GithubClient::new(self.token.clone());
        let fetcher = CommitFetcher::new(client);
        let opts = FetchOptions::new(&self.owner, &self.repo)
            .with_branch(&self.branch)
            .with_per_page(self.per_page);

        // Create a tokio runtime for the fetch
        let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
        let session = rt
            .block_on(fetcher.fetch(&opts))
            .with_context(|| format!("failed to fetch commits for {}/{}", self.owner, self.repo))?;

        // The output file is only created once the whole history has been
        // fetched; a mid-pagination failure leaves nothing behind.
        let count = session.len();
        write_csv(&self.output, &session)
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        println!("Saved {count} commits to {}", self.output.display());
        Ok(())
    }
}

/// Writes the session to a CSV file: header first, then one row per
/// record in fetch order.
fn write_csv(path: &Path, session: &FetchSession) -> Result<()> {
    let mut sink = CsvSink::create(path)?;
    sink.write_header(&CommitRecord::CSV_HEADER)?;
    for record in session.records() {
        sink.write_row(record.csv_fields())?;
    }
    sink.finish()?;
    Ok(())
}

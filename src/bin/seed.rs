//! Bulk loader for benchmark data.
//!
//! Inserts `--count` mappings with unique random URLs under `--domain`, using
//! the full-scan strategy so the run works against a store without the unique
//! index.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin seed -- --count 100000 --domain https://example.com
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use shortlink::application::strategies::{FullScanStrategy, UrlStrategy};
use shortlink::config::Config;
use shortlink::infrastructure::persistence::PgMappingRepository;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::{Duration, Instant};

const PROGRESS_EVERY: usize = 10_000;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Fill the mapping table with random URLs", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of mappings to create
    #[arg(long, default_value_t = 100_000)]
    count: i64,

    /// Scheme and host the generated URLs live under
    #[arg(long, default_value = "https://example.com")]
    domain: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let count = validate_count(cli.count)?;
    let domain = validate_domain(&cli.domain)?;

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let strategy = FullScanStrategy::new(repository, &config.base_url);

    println!("{}", "🌱 Seeding mappings".bright_blue().bold());
    println!("  Count:  {}", count.to_string().cyan());
    println!("  Domain: {}", domain.cyan());
    println!();

    let report = seed(&strategy, &domain, count).await;

    println!();
    println!(
        "{} {} created, {} failed in {:.1}s ({:.0}/s)",
        "✅ Done:".green().bold(),
        report.created.to_string().bright_white().bold(),
        report.failed.to_string().red(),
        report.elapsed.as_secs_f64(),
        report.rate()
    );

    Ok(())
}

struct SeedReport {
    created: usize,
    failed: usize,
    elapsed: Duration,
}

impl SeedReport {
    fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.created as f64 / secs
    }
}

/// Creates `count` mappings one at a time. Failures are reported and skipped.
async fn seed(strategy: &dyn UrlStrategy, domain: &str, count: usize) -> SeedReport {
    let started = Instant::now();
    let mut created = 0;
    let mut failed = 0;

    for i in 1..=count {
        let url = random_url(domain);
        match strategy.create_short_url(&url, None).await {
            Ok(_) => created += 1,
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {}", "❌".red(), url, e);
            }
        }

        if i % PROGRESS_EVERY == 0 || i == count {
            let elapsed = started.elapsed().as_secs_f64();
            let rate = if elapsed > 0.0 { i as f64 / elapsed } else { 0.0 };
            println!(
                "  {}/{} ({:.0}/s, {:.1}s elapsed)",
                i.to_string().bright_white(),
                count,
                rate,
                elapsed
            );
        }
    }

    SeedReport {
        created,
        failed,
        elapsed: started.elapsed(),
    }
}

fn random_url(domain: &str) -> String {
    format!("{}/{}", domain, uuid::Uuid::new_v4())
}

fn validate_count(count: i64) -> Result<usize> {
    if count <= 0 {
        anyhow::bail!("--count must be positive, got {}", count);
    }
    usize::try_from(count).context("--count is too large")
}

/// Checks that `domain` is an absolute http(s) URL and strips trailing slashes.
fn validate_domain(domain: &str) -> Result<String> {
    let parsed = url::Url::parse(domain).with_context(|| format!("Invalid --domain '{}'", domain))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("--domain must start with http:// or https://, got '{}'", domain);
    }
    Ok(domain.trim_end_matches('/').to_string())
}

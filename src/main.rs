mod loader;
mod parser;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use report::{MajorReport, ReportMap};

#[derive(Parser)]
#[command(name = "major_reports", about = "Major report card parser and explorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Source {
    /// Read the report document from a local file
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,
    /// Fetch the report document from a URL
    #[arg(long)]
    url: Option<String>,
}

impl Source {
    async fn load(&self) -> Result<String> {
        match (&self.file, &self.url) {
            (Some(path), None) => loader::read_document(path),
            (None, Some(url)) => loader::fetch_document(url).await,
            _ => Err(anyhow!("Pass exactly one of --file or --url")),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Majors overview table
    List {
        #[command(flatten)]
        source: Source,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Full report for one major
    Show {
        #[command(flatten)]
        source: Source,
        /// Major name (matching ignores case and punctuation)
        major: String,
    },
    /// Dump the parsed map as JSON
    Export {
        #[command(flatten)]
        source: Source,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Corpus statistics
    Stats {
        #[command(flatten)]
        source: Source,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { source, limit } => {
            let map = parse_source(&source).await?;
            print_overview(&map, limit);
            Ok(())
        }
        Commands::Show { source, major } => {
            let map = parse_source(&source).await?;
            let report = map.lookup(&major).ok_or_else(|| {
                anyhow!("No report card for '{}' ({} majors parsed)", major, map.len())
            })?;
            print_report(report);
            Ok(())
        }
        Commands::Export { source, pretty } => {
            let map = parse_source(&source).await?;
            let json = if pretty {
                serde_json::to_string_pretty(&map)?
            } else {
                serde_json::to_string(&map)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Stats { source } => {
            let map = parse_source(&source).await?;
            print_stats(&map);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

async fn parse_source(source: &Source) -> Result<ReportMap> {
    let text = source.load().await?;
    let map = parser::parse_document(&text);
    info!("Parsed {} majors", map.len());
    Ok(map)
}

fn print_overview(map: &ReportMap, limit: usize) {
    if map.is_empty() {
        println!("No report cards found.");
        return;
    }

    println!(
        "{:>3} | {:<28} | {:>5} | {:>8} | {:>7} | {:>6} | {:<32}",
        "#", "Major", "Chips", "Subjects", "Careers", "Skills", "Tagline"
    );
    println!("{}", "-".repeat(108));

    for (i, (_key, r)) in map.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:<28} | {:>5} | {:>8} | {:>7} | {:>6} | {:<32}",
            i + 1,
            truncate(&r.name, 28),
            r.trait_chips.len(),
            r.core_subjects.len(),
            r.career_paths.len(),
            r.skills.len(),
            truncate(r.tagline.as_deref().unwrap_or("-"), 32),
        );
    }

    println!("\n{} majors", map.len());
}

fn print_report(r: &MajorReport) {
    println!("{}", r.name);
    println!("{}", "=".repeat(r.name.chars().count()));
    if let Some(tagline) = &r.tagline {
        println!("{}", tagline);
    }
    if !r.trait_chips.is_empty() {
        println!("Traits: {}", r.trait_chips.join(" • "));
    }

    print_text("Personal Fit", r.personal_fit_summary.as_deref());
    print_text("Connection", r.connection_summary.as_deref());
    print_text("What You Study", r.study_overview.as_deref());
    print_list("Core Subjects", &r.core_subjects);
    print_list("Child Majors", &r.child_majors);
    print_list("Career Paths", &r.career_paths);
    print_list("Work Settings", &r.work_settings);
    print_list("Skills", &r.skills);
    print_text("Study Snapshot", r.study_snapshot.as_deref());
    print_text("Pros & Challenges", r.pros_challenges.as_deref());
    print_text("Footer", r.footer.as_deref());
}

fn print_text(title: &str, body: Option<&str>) {
    if let Some(body) = body {
        println!("\n--- {} ---", title);
        println!("{}", body);
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n--- {} ---", title);
    for item in items {
        println!("  - {}", item);
    }
}

fn print_stats(map: &ReportMap) {
    let with_tagline = map.reports().filter(|r| r.tagline.is_some()).count();
    let with_fit = map
        .reports()
        .filter(|r| r.personal_fit_summary.is_some())
        .count();
    let with_snapshot = map.reports().filter(|r| r.study_snapshot.is_some()).count();
    let chips: usize = map.reports().map(|r| r.trait_chips.len()).sum();
    let subjects: usize = map.reports().map(|r| r.core_subjects.len()).sum();
    let careers: usize = map.reports().map(|r| r.career_paths.len()).sum();
    let skills: usize = map.reports().map(|r| r.skills.len()).sum();

    println!("Majors:        {}", map.len());
    println!("With tagline:  {}", with_tagline);
    println!("With fit text: {}", with_fit);
    println!("With snapshot: {}", with_snapshot);
    println!("Trait chips:   {}", chips);
    println!("Core subjects: {}", subjects);
    println!("Career paths:  {}", careers);
    println!("Skills:        {}", skills);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

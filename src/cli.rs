use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use ocdb_application::prelude::{self as flows, VoteOutcome};
use ocdb_core::{
    gateways::{geoloc::GeolocationGateway as _, weather::WeatherGateway as _},
    stats::IssueStats,
    usecases,
};
use ocdb_db_mem::MemoryStore;
use ocdb_entities::{category::Category, geo::MapPoint, issue::Issue, status::IssueStatus};
use ocdb_gateways::{geoloc::FixedPositionGateway, weather::WeatherApiGateway};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "opencivicdb", about = "Community civic-issue reporting database", version)]
struct Args {
    /// Path of the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report a new issue.
    Report {
        #[arg(long)]
        category: Category,
        #[arg(long)]
        description: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        user: String,
    },
    /// List issues, optionally filtered by category.
    List {
        #[arg(long)]
        category: Option<Category>,
    },
    /// Show one issue with its comments.
    Show { id: String },
    /// Cast a vote on an issue.
    Vote {
        id: String,
        #[arg(long)]
        user: String,
    },
    /// Add a comment to an issue.
    Comment {
        id: String,
        text: String,
        #[arg(long)]
        user: String,
    },
    /// Change the workflow status of an issue.
    Status { id: String, status: IssueStatus },
    /// Aggregated counts by status and category.
    Stats,
    /// Current weather at the given or configured position.
    Weather {
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lng: Option<f64>,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    let store = MemoryStore::load_from_file(&cfg.db.file)?;

    match args.command {
        Command::Report {
            category,
            description,
            lat,
            lng,
            image_url,
            user,
        } => {
            let id = flows::report_issue(
                &store,
                usecases::NewIssue {
                    category,
                    description,
                    lat,
                    lng,
                    image_url,
                    reported_by: user.into(),
                },
            )?;
            store.dump_to_file(&cfg.db.file)?;
            println!("Reported issue {id}");
        }
        Command::List { category } => {
            let issues =
                usecases::filter_issues_by_category(usecases::load_issues(&store)?, category);
            if issues.is_empty() {
                println!("No issues found.");
            }
            for issue in &issues {
                print_issue_line(issue);
            }
        }
        Command::Show { id } => {
            print_issue_details(&usecases::get_issue(&store, &id)?);
        }
        Command::Vote { id, user } => {
            match flows::upvote_issue(&store, &id, &user.into())? {
                VoteOutcome::Counted => {
                    store.dump_to_file(&cfg.db.file)?;
                    println!("Vote counted.");
                }
                VoteOutcome::AlreadyVoted => {
                    println!("Already voted.");
                }
            }
        }
        Command::Comment { id, text, user } => {
            flows::add_comment(&store, &id, &user.into(), &text)?;
            store.dump_to_file(&cfg.db.file)?;
            println!("Comment added.");
        }
        Command::Status { id, status } => {
            flows::set_issue_status(&store, &id, status)?;
            store.dump_to_file(&cfg.db.file)?;
            println!("Status changed to {status}.");
        }
        Command::Stats => {
            let feed = flows::LiveFeed::subscribe(&store);
            print_stats(&feed.current().stats);
        }
        Command::Weather { lat, lng } => {
            let pos = match (lat, lng) {
                (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng)
                    .map_err(|_| anyhow!("Invalid position"))?,
                _ => FixedPositionGateway::new(cfg.geolocation.position).current_position()?,
            };
            let api_key = cfg
                .weather
                .api_key
                .ok_or_else(|| anyhow!("No weather API key configured"))?;
            let gateway = WeatherApiGateway::new(api_key, cfg.weather.timeout)?;
            let observation = gateway.current_weather(pos)?;
            println!(
                "{} ({} °C, wind {} km/h, humidity {} %)",
                observation.condition_text,
                observation.temp_celsius,
                observation.wind_kph,
                observation.humidity
            );
        }
    }
    Ok(())
}

fn print_issue_line(issue: &Issue) {
    println!(
        "{}  [{}] {} ({} votes) - {}",
        issue.id,
        issue.status,
        issue.category.label(),
        issue.votes,
        issue.description
    );
}

fn print_issue_details(issue: &Issue) {
    println!("Id:          {}", issue.id);
    println!("Category:    {}", issue.category.label());
    println!("Status:      {}", issue.status);
    println!("Position:    {}", issue.position);
    println!("Votes:       {}", issue.votes);
    println!("Reported by: {}", issue.reported_by);
    if let Some(created_at) = issue.created_at {
        println!("Reported at: {created_at}");
    }
    println!("{}", issue.description);
    // Most recent first, insertion order preserved underneath.
    for comment in issue.recent_comments() {
        match comment.created_at {
            Some(at) => println!("  {} ({at}): {}", comment.author, comment.text),
            None => println!("  {} (pending): {}", comment.author, comment.text),
        }
    }
}

fn print_stats(stats: &IssueStats) {
    println!("Total issues: {}", stats.total);
    println!("By status:");
    for (status, count) in &stats.by_status {
        println!("  {:<22} {:>4}  {}", status.to_string(), count, bar(*count, stats.max_status));
    }
    println!("By category:");
    for (category, count) in &stats.by_category {
        println!("  {:<22} {:>4}  {}", category.label(), count, bar(*count, stats.max_category));
    }
}

const BAR_WIDTH: usize = 40;

fn bar(count: usize, max: usize) -> String {
    // max has a floor of 1, so the division is always safe.
    "#".repeat(count * BAR_WIDTH / max)
}

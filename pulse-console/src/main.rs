//! pulse-console - drive a PulsePilot session from the terminal
//!
//! Each invocation seeds a fresh session (there is no persistence by
//! design) and runs one dashboard surface: the overview bar, the content
//! generator, the scheduling calendar, or the engagement console.

use clap::{Parser, Subcommand};
use libpulsepilot::generator::{known_categories, suggested_platform_copy, GenerateRequest};
use libpulsepilot::schedule::{group_by_day, parse_when, ScheduleInput};
use libpulsepilot::types::{Platform, Tone};
use libpulsepilot::{Config, PulsePilotError, Result, Session};

#[derive(Parser, Debug)]
#[command(name = "pulse-console")]
#[command(version)]
#[command(about = "Social media management console over an in-memory session")]
#[command(long_about = "\
pulse-console - Social media management console

DESCRIPTION:
    pulse-console seeds an in-memory PulsePilot session and runs one
    dashboard surface per invocation. Nothing persists between runs.

COMMANDS:
    overview    Account summaries and the live-monitor digest
    generate    Generate a post from the static content tables
    calendar    Upcoming schedule grouped by day
    threads     Comment triage listing

USAGE EXAMPLES:
    # Account summaries with platform strengths
    pulse-console overview

    # Generate and immediately schedule to the selected accounts
    pulse-console generate --topic \"Micro habits\" --category wellness \\
        --tone inspirational --platform instagram --at \"tomorrow 9am\"

    # Calendar in JSON
    pulse-console calendar --format json

CONFIGURATION:
    Configuration file: ~/.config/pulsepilot/config.toml
    Override with PULSEPILOT_CONFIG.

EXIT CODES:
    0 - Success
    1 - Configuration error
    3 - Invalid input (unknown tone/platform, bad schedule time)
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Account summaries and the live-monitor digest
    Overview {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate a post from the static content tables
    Generate {
        /// Campaign topic
        #[arg(short, long)]
        topic: String,

        /// Content category (wellness, marketing, travel, food, design)
        #[arg(short, long)]
        category: String,

        /// Brand voice: inspirational, educational, friendly, bold
        #[arg(long, default_value = "inspirational")]
        tone: String,

        /// Target platform (repeatable); defaults from config
        #[arg(short, long)]
        platform: Vec<String>,

        /// Fixed RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the simulated generation delay
        #[arg(long)]
        no_delay: bool,

        /// Schedule the result right away at this time ("45m", "tomorrow 3pm")
        #[arg(long)]
        at: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Upcoming schedule grouped by day
    Calendar {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Comment triage listing
    Threads {
        /// Restrict to threads owned by this account id (repeatable)
        #[arg(short, long)]
        account: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("error")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Overview { format } => overview(&config, &format),
        Commands::Generate {
            topic,
            category,
            tone,
            platform,
            seed,
            no_delay,
            at,
            format,
        } => {
            let mut config = config;
            if let Some(seed) = seed {
                config.generation.seed = Some(seed);
            }
            if no_delay {
                config.generation.delay_ms = 0;
            }
            generate(&config, topic, category, tone, platform, at, &format).await
        }
        Commands::Calendar { format } => calendar(&config, &format),
        Commands::Threads { account, format } => threads(&config, account, &format),
    }
}

fn overview(config: &Config, format: &str) -> Result<()> {
    let session = Session::new(config);

    if format == "json" {
        let body = serde_json::json!({
            "accounts": session.accounts(),
            "selected": session.registry().selected_ids(),
            "digest": session.activity_digest(),
            "queued": session.schedule_store().upcoming().len(),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
        return Ok(());
    }

    println!("Connected accounts");
    for account in session.accounts() {
        let marker = if session
            .registry()
            .selected_ids()
            .contains(&account.id)
        {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:<18} {:<12} {:>8} followers  {:+.1}%  ({})",
            marker,
            account.name,
            account.platform,
            account.followers,
            account.follower_change,
            suggested_platform_copy(account.platform),
        );
    }

    println!("\nLive monitor");
    let digest = session.activity_digest();
    if digest.is_empty() {
        println!("  No pending launches");
    }
    for entry in digest {
        let platforms: Vec<String> = entry.platforms.iter().map(|p| p.to_string()).collect();
        println!(
            "  {}  {}  [{}]",
            entry.scheduled_for.format("%a, %b %-d %H:%M"),
            platforms.join(", "),
            entry.status,
        );
    }
    println!(
        "\n{} items queued",
        session.schedule_store().upcoming().len()
    );
    Ok(())
}

async fn generate(
    config: &Config,
    topic: String,
    category: String,
    tone: String,
    platforms: Vec<String>,
    at: Option<String>,
    format: &str,
) -> Result<()> {
    let tone: Tone = tone.parse().map_err(PulsePilotError::InvalidInput)?;
    let platforms = if platforms.is_empty() {
        config.defaults.platforms.clone()
    } else {
        platforms
            .iter()
            .map(|p| p.parse::<Platform>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(PulsePilotError::InvalidInput)?
    };

    if !known_categories().contains(&category.as_str()) {
        tracing::warn!(%category, "unrecognized category, hashtags will be pooled");
    }

    let mut session = Session::new(config);
    let post = session
        .generate(GenerateRequest {
            topic,
            category,
            tone,
            platforms,
        })
        .await;

    let scheduled = match at {
        Some(when) => {
            let scheduled_for = parse_when(&when)?;
            let account_ids = session.registry().selected_ids().to_vec();
            Some(session.schedule_post(ScheduleInput {
                content_id: None,
                account_ids,
                platforms: vec![],
                scheduled_for,
                caption: post.caption.clone(),
                hashtags: post.hashtags.clone(),
                asset_prompt: post.image_prompt.clone(),
            }))
        }
        None => None,
    };

    if format == "json" {
        let body = serde_json::json!({ "post": post, "scheduled": scheduled });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
        return Ok(());
    }

    println!("Caption:\n  {}\n", post.caption);
    println!("Hashtags:  {}", post.hashtags.join(" "));
    println!("Asset:     {}", post.image_prompt);
    let recommended: Vec<String> = post
        .recommended_platforms
        .iter()
        .map(|p| p.to_string())
        .collect();
    println!("Platforms: {}", recommended.join(", "));
    println!("Score:     {}/100", post.engagement_score);

    if let Some(entry) = scheduled {
        println!(
            "\nScheduled {} for {}",
            entry.id,
            entry.scheduled_for.format("%a, %b %-d %H:%M")
        );
    }
    Ok(())
}

fn calendar(config: &Config, format: &str) -> Result<()> {
    let session = Session::new(config);
    let upcoming = session.schedule_store().upcoming();

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&upcoming).unwrap_or_default()
        );
        return Ok(());
    }

    if upcoming.is_empty() {
        println!("Nothing scheduled");
        return Ok(());
    }

    for (day, posts) in group_by_day(&upcoming) {
        println!("{}", day);
        for post in posts {
            let platforms: Vec<String> = post.platforms.iter().map(|p| p.to_string()).collect();
            println!(
                "  {}  [{}]  {}  ({})",
                post.scheduled_for.format("%H:%M"),
                post.status,
                post.caption,
                platforms.join(", "),
            );
        }
    }
    Ok(())
}

fn threads(config: &Config, accounts: Vec<String>, format: &str) -> Result<()> {
    let mut session = Session::new(config);

    // narrow the selection to the requested accounts, if any resolve;
    // additions go first so removals never hit the last-account boundary
    if !accounts.is_empty() {
        for id in &accounts {
            if !session.registry().selected_ids().contains(id) {
                session.toggle_account_selection(id);
            }
        }
        let current = session.registry().selected_ids().to_vec();
        for id in &current {
            if !accounts.contains(id) {
                session.toggle_account_selection(id);
            }
        }
    }

    let visible = session.visible_threads();

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&visible).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{} open threads", visible.len());
    for thread in visible {
        let owner = session
            .accounts()
            .iter()
            .find(|a| a.id == thread.account_id)
            .map(|a| a.name.as_str())
            .unwrap_or("unknown account");
        println!(
            "{:<10} {:<32} {:?}/{:?}  {} replies needed  ({})",
            thread.platform.to_string(),
            thread.post_title,
            thread.sentiment,
            thread.priority,
            thread.replies_needed(),
            owner,
        );
    }
    Ok(())
}

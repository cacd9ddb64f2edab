//! Terminal client for the URL shortening backend.
//!
//! Drives the same dashboard and analytics views as the web dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL and copy the result (OSC 52)
//! cargo run --bin links -- shorten https://example.com/a/b/c --copy
//!
//! # Shorten with a custom code
//! cargo run --bin links -- shorten https://example.com --code promo
//!
//! # Browse the history
//! cargo run --bin links -- list --page 2
//!
//! # Delete a link (asks for confirmation unless -y)
//! cargo run --bin links -- delete abc123
//!
//! # Show analytics
//! cargo run --bin links -- stats abc123
//!
//! # Print the dashboard's analytics URL
//! cargo run --bin links -- open abc123
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL`: backend base URL (default: `http://localhost:5000`)
//! - `REQUEST_TIMEOUT_SECONDS`, `BACKEND_RETRY_ATTEMPTS`: see the server configuration

use url_shortener_dashboard::application::views::{
    AccessLog, AnalyticsView, ChartSeries, DashboardView, Notice, NoticeLevel,
};
use url_shortener_dashboard::application::views::analytics::NO_ACTIVITY;
use url_shortener_dashboard::config::Config;
use url_shortener_dashboard::domain::ports::{Confirmer, ShortenerApi};
use url_shortener_dashboard::infrastructure::backend::HttpShortenerClient;
use url_shortener_dashboard::infrastructure::clipboard::Osc52Clipboard;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::process::ExitCode;
use std::sync::Arc;

const BAR_WIDTH: u64 = 40;

/// Terminal client for the URL shortener.
#[derive(Parser)]
#[command(name = "links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides API_BASE_URL)
    #[arg(long, global = true)]
    api: Option<String>,

    /// Dashboard origin used when printing analytics URLs
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    dashboard_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// The long URL
        url: String,

        /// Custom short code (generated by the backend if omitted)
        #[arg(short, long)]
        code: Option<String>,

        /// Copy the short URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List shortened URLs
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Delete a short link
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show analytics for a short link
    Stats {
        /// Short code
        code: String,

        /// Copy the short URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print the dashboard URL of a link's analytics page
    Open {
        /// Short code
        code: String,
    },
}

/// Interactive yes/no prompt on the terminal. Defaults to "no".
struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Confirmation given up front with `-y`.
struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api) = cli.api {
        config.api_base_url = api;
    }
    config.validate()?;

    let client = HttpShortenerClient::new(&config.api_base_url, config.client_options())
        .context("Failed to build backend client")?;
    let api: Arc<dyn ShortenerApi> = Arc::new(client);

    let ok = match cli.command {
        Commands::Shorten { url, code, copy } => shorten(api, &url, code.as_deref(), copy).await,
        Commands::List { page } => list(api, page).await,
        Commands::Delete { code, yes } => delete(api, &code, yes).await,
        Commands::Stats { code, copy } => stats(api, &code, copy).await,
        Commands::Open { code } => {
            let view = DashboardView::new(api);
            println!("{}", view.open_stats(&code).url(&cli.dashboard_url));
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn shorten(api: Arc<dyn ShortenerApi>, url: &str, code: Option<&str>, copy: bool) -> bool {
    let mut view = DashboardView::new(api);

    if !view.submit_new_link(url, code).await {
        print_notices(view.take_notices());
        return false;
    }

    if let Some(short_url) = view.short_url().map(str::to_string) {
        println!();
        println!("  {}", short_url.bright_yellow().bold());
        println!();

        if copy {
            view.copy_short_url(&short_url, &Osc52Clipboard).await;
        }
    }

    print_notices(view.take_notices());
    true
}

/// Prints one page of history.
///
/// # Output Format
///
/// ```text
/// Shortened URLs (page 1 of 3)
///
///   Code       Clicks  Created           Original URL
///   ──────────────────────────────────────────────────────────
///   abc123     7       2026-02-01 08:00  https://example.com/a/b/c
/// ```
async fn list(api: Arc<dyn ShortenerApi>, page: u32) -> bool {
    let mut view = DashboardView::new(api);
    view.load_history(page).await;

    if view.history().error().is_some() {
        print_notices(view.take_notices());
        return false;
    }

    let state = view.page();
    println!(
        "{} {}",
        "Shortened URLs".bright_blue().bold(),
        format!("(page {} of {})", state.current_page(), state.total_pages()).bright_black()
    );
    println!();

    if state.items().is_empty() {
        println!("{}", "  No URLs yet".yellow());
        println!();
        println!("  Create one with: {} shorten <url>", "links".bright_cyan());
        return true;
    }

    println!(
        "  {:<10} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in state.items() {
        println!(
            "  {:<10} {:<7} {:<17} {}",
            link.short_code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    if view.can_go_next() {
        println!(
            "  Next page: {} list --page {}",
            "links".bright_cyan(),
            state.current_page() + 1
        );
    }

    true
}

async fn delete(api: Arc<dyn ShortenerApi>, code: &str, yes: bool) -> bool {
    let mut view = DashboardView::new(api);

    let confirmer: &dyn Confirmer = if yes { &AlwaysConfirm } else { &TerminalConfirmer };
    let deleted = view.delete_link(code, confirmer).await;

    if !deleted && view.deletion().is_idle() {
        println!("{}", "Cancelled".red());
        return true;
    }

    print_notices(view.take_notices());
    deleted
}

async fn stats(api: Arc<dyn ShortenerApi>, code: &str, copy: bool) -> bool {
    let mut view = AnalyticsView::new(api);
    view.load_statistics(code).await;

    if let Some(error) = view.state().error() {
        println!("{}", "Error".red().bold());
        println!("  {error}");
        println!();
        println!("  Go back: {} list", "links".bright_cyan());
        print_notices(view.take_notices());
        return false;
    }

    let (Some(summary), Some(series), Some(log)) =
        (view.summary(), view.time_series(), view.access_log())
    else {
        return false;
    };

    println!("{}", "URL Analytics".bright_blue().bold());
    println!();
    println!("  Original URL: {}", summary.original_url);
    println!("  Short URL:    {}", summary.short_url.bright_yellow());
    println!(
        "  Created on:   {}",
        summary.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Total clicks: {}",
        summary.total_clicks.to_string().bright_green().bold()
    );
    println!();

    print_chart(&series);
    print_access_log(&log);

    if copy {
        view.copy_short_url(&summary.short_url, &Osc52Clipboard).await;
    }

    print_notices(view.take_notices());
    true
}

fn print_chart(series: &ChartSeries) {
    println!("{}", series.title.bright_white().bold());
    println!();

    if series.is_empty() {
        println!("{}", "  No clicks recorded".bright_black());
        println!();
        return;
    }

    let max = series.max_clicks().max(1);
    for point in &series.points {
        let width = (point.clicks * BAR_WIDTH).div_ceil(max) as usize;
        println!(
            "  {}  {:<40} {}",
            point.label.bright_black(),
            "█".repeat(width).blue(),
            point.clicks
        );
    }
    println!();
}

fn print_access_log(log: &AccessLog) {
    println!("{}", "Recent Activity".bright_white().bold());
    println!();

    let rows = match log {
        AccessLog::Empty => {
            println!("  {}", NO_ACTIVITY.bright_black());
            println!();
            return;
        }
        AccessLog::Rows(rows) => rows,
    };

    println!(
        "  {:<19} {:<16} {:<30} {}",
        "Date & Time".bright_white().bold(),
        "IP Address".bright_white().bold(),
        "Referrer".bright_white().bold(),
        "User Agent".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for row in rows {
        println!(
            "  {:<19} {:<16} {:<30} {}",
            row.accessed_at.format("%Y-%m-%d %H:%M:%S"),
            row.ip_address,
            truncate(&row.referrer, 30),
            truncate(&row.user_agent, 40)
        );
    }
    println!();
}

fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        let line = match notice.level {
            NoticeLevel::Success => notice.message.green().bold(),
            NoticeLevel::Info => notice.message.cyan(),
            NoticeLevel::Error => notice.message.red().bold(),
        };
        println!("{line}");
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

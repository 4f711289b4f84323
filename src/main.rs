use chrono::NaiveDate;
use clap::Parser;
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use meal_advisor_rs::advisor::build_report;
use meal_advisor_rs::cli::{Cli, Command};
use meal_advisor_rs::client::fetch_menu_xml;
use meal_advisor_rs::error::Result;
use meal_advisor_rs::interface::{Icon, Notification, render_recommendation, render_report};
use meal_advisor_rs::models::Audience;
use meal_advisor_rs::parser::parse_meal_response;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(e) = run() {
        let note = Notification::from_error(&e);
        note.display();
        if note.icon == Icon::Error {
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let date = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    match command {
        Command::Show { audience } => cmd_show(&cli.base_url, date, audience, false),
        Command::Recommend { audience } => cmd_show(&cli.base_url, date, audience, true),
    }
}

/// Fetch one day's meals, then render everything or just the dinner pick.
fn cmd_show(
    base_url: &str,
    date: NaiveDate,
    audience: Audience,
    recommendation_only: bool,
) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let xml = fetch_menu_xml(&client, base_url, date)?;
    let records = parse_meal_response(&xml)?;

    let mut rng = thread_rng();
    let report = build_report(&records, audience, &mut rng);

    println!("{} ({} 기준)", date.format("%Y-%m-%d"), audience.label());
    println!();

    if recommendation_only {
        print!("{}", render_recommendation(&report.recommendation));
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

mod passes;

use std::process::ExitCode;
use std::time::Duration;

use chrono_tz::Tz;
use clap::Parser;

use crate::passes::{Pass, PassClient};

#[derive(Parser)]
#[command(name = "iss-passes")]
#[command(about = "Fetch upcoming ISS passes for a location from N2YO")]
struct Cli {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// Number of passes to request
    #[arg(short = 'n', long, default_value_t = 5)]
    count: u32,
    /// N2YO API key (falls back to the N2YO_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,
    /// Include all passes, not just visible ones
    #[arg(long)]
    all: bool,
    /// Display timezone name (e.g. Asia/Kolkata), defaults to system local
    #[arg(long)]
    tz: Option<Tz>,
    /// HTTP timeout
    #[arg(long, default_value = "10s", value_parser = parse_duration)]
    timeout: Duration,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let client = match PassClient::new(cli.api_key.clone(), cli.timeout) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let passes = match client.get_passes(cli.lat, cli.lon, cli.count, !cli.all) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if passes.is_empty() {
        println!("No upcoming ISS passes found.");
        return ExitCode::SUCCESS;
    }

    println!(
        "Upcoming ISS passes for lat={}, lon={} ({}):\n",
        cli.lat,
        cli.lon,
        if cli.all { "all" } else { "visible only" }
    );
    for pass in &passes {
        println!("{}", format_pass(pass, cli.tz));
    }

    ExitCode::SUCCESS
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

const RISE_TIME_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p %Z";

fn format_pass(pass: &Pass, tz: Option<Tz>) -> String {
    let rise = match tz {
        Some(tz) => pass.rise_time_in(tz).format(RISE_TIME_FORMAT).to_string(),
        None => pass.rise_time_local().format(RISE_TIME_FORMAT).to_string(),
    };

    let mut line = format!("🛰  {} — Duration: {} seconds", rise, pass.duration_seconds);
    if let Some(mag) = pass.magnitude {
        line.push_str(&format!(" — Mag: {}", mag));
    }
    line
}

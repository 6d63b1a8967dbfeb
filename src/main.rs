//! dockside - NWIS download CLI
//!
//! Fetches one station's observations for a date range, optionally caching
//! them under the save directory. A cached file is reused on later runs
//! unless --force is given.
//!
//! Usage:
//!   dockside SITE START END [--daily] [--save] [--force]
//!            [--savepath DIR] [--config FILE]
//!
//! Example:
//!   dockside 08071280 2012-10-01 2012-12-01 --daily --save

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;

use dockside::config::{self, Config};
use dockside::station::Station;
use dockside::table::ColumnData;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} SITE START END [--daily] [--save] [--force] [--savepath DIR] [--config FILE]",
        program
    );
    std::process::exit(1);
}

fn parse_date(raw: &str, program: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|_| {
        eprintln!("Error: '{}' is not a YYYY-MM-DD date", raw);
        usage(program);
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("dockside");

    let mut positional: Vec<String> = Vec::new();
    let mut daily = false;
    let mut save = false;
    let mut force = false;
    let mut savepath: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--daily" => {
                daily = true;
                i += 1;
            }
            "--save" => {
                save = true;
                i += 1;
            }
            "--force" => {
                force = true;
                i += 1;
            }
            "--savepath" => {
                if i + 1 < args.len() {
                    savepath = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("Error: --savepath requires a directory");
                    usage(program);
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a file path");
                    usage(program);
                }
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {}", other);
                usage(program);
            }
            _ => {
                positional.push(args[i].clone());
                i += 1;
            }
        }
    }

    if positional.len() != 3 {
        usage(program);
    }
    let site = positional[0].clone();
    let start = parse_date(&positional[1], program);
    let end = parse_date(&positional[2], program);

    let config = match config_path {
        Some(path) => config::load_config(&path),
        None => Config::default(),
    };
    let savepath = savepath.unwrap_or(config.savepath);

    let station = Station::new(site, start, end, savepath)
        .with_query_params(config.query_params);

    println!("🌊 dockside");
    println!("   Site:  {}", station.site());
    println!("   Range: {} through {}", station.start(), station.end());
    println!("   URL:   {}", station.url(daily));
    println!("   Cache: {}", station.cache_path(daily).display());

    match station.get_data(daily, save, force) {
        Ok(Some(table)) => {
            println!(
                "\n✓ {} rows × {} columns",
                table.len(),
                table.columns().len()
            );
            for column in table.columns() {
                // One sample cell per column so a glance confirms the data.
                let sample = match &column.data {
                    ColumnData::Value(cells) => cells
                        .iter()
                        .flatten()
                        .next()
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                    ColumnData::Qual(cells) => {
                        cells.iter().flatten().next().cloned().unwrap_or_default()
                    }
                };
                println!("   {}  e.g. {}", column.key, sample);
            }
        }
        Ok(None) => {
            println!("\n⚠ NWIS returned no time series for this site and range");
        }
        Err(e) => {
            eprintln!("\n❌ {}", e);
            std::process::exit(1);
        }
    }
}

//! Example: building a calendar index from JSON feed files
//!
//! Loads configuration the same way a host would, installs the tracing
//! subscriber, then aggregates a posts feed and a calendar feed.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=campuscal_core=debug cargo run -p campuscal-infra --example build_index -- \
//!     posts.json events.json academic institutional
//! ```
//!
//! With no category arguments the whole taxonomy is selected.

#![allow(clippy::print_stdout)]

use std::path::Path;

use campuscal_core::{indicators_for, EventAggregator};
use campuscal_domain::{CampusCalError, CategoryFilter, RawCalendarEvent, RawPost};
use campuscal_infra::{init_tracing, load_config};
use serde::de::DeserializeOwned;

fn read_feed<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CampusCalError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CampusCalError::InvalidInput(format!("{}: {e}", path.display())))?;
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_tracing(&config)?;

    let mut args = std::env::args().skip(1);
    let posts: Vec<RawPost> = match args.next() {
        Some(path) => read_feed(Path::new(&path))?,
        None => Vec::new(),
    };
    let events: Vec<RawCalendarEvent> = match args.next() {
        Some(path) => read_feed(Path::new(&path))?,
        None => Vec::new(),
    };
    let selected: CategoryFilter = {
        let names: Vec<String> = args.collect();
        if names.is_empty() { CategoryFilter::taxonomy() } else { names.into_iter().collect() }
    };

    let aggregator = EventAggregator::new(&config)?;
    let index = aggregator.build(&posts, &events, &selected);

    let mut months: Vec<_> = index.month_counts().iter().collect();
    months.sort();
    for (month, count) in months {
        println!("{month}: {count} item(s)");
        for day in index.days_in_month(*month) {
            let items = index.events_for_day(day);
            let indicators = indicators_for(items);
            let colors: Vec<&str> = indicators.colors.iter().map(|c| c.as_str()).collect();
            println!("  {day} [{}]", colors.join(" "));
            for item in items {
                println!("    - {} ({})", item.title, item.category);
            }
        }
        for placeholder in index.placeholders_for_month(*month) {
            println!("  (month) {} ({})", placeholder.title, placeholder.category);
        }
    }
    println!("{}", serde_json::to_string_pretty(index.stats())?);
    Ok(())
}

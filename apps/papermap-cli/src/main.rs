//! papermap explorer CLI
//!
//! Drives the explorer headlessly: load a corpus directory, list the filter
//! options it offers, apply filters, and lock onto individual papers.

mod config;

use clap::Parser;
use config::AppConfig;
use papermap_domain::LabelCategory;
use papermap_engine::{
    Choice, Explorer, FilterCriteria, LabelFilter, RecordingSurface, SurfaceEvent, YearSpec,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "papermap",
    about = "Explore a pre-computed paper corpus from the command line"
)]
struct Cli {
    /// Directory containing papers.json, assignments.json and colors.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Assignment mode key to color by (default: first mode in the file)
    #[arg(long)]
    mode: Option<String>,

    /// Year filter, e.g. "2018-2021, 2024"
    #[arg(long)]
    years: Option<String>,

    /// Country filter (exact match)
    #[arg(long)]
    country: Option<String>,

    /// Institution filter (exact match)
    #[arg(long)]
    institution: Option<String>,

    /// Label filter as category=value, e.g. "task=Segmentation"
    #[arg(long)]
    label: Option<String>,

    /// Print the filter options the corpus offers, then exit
    #[arg(long)]
    options: bool,

    /// Lock onto this paper and print its detail panel
    #[arg(long)]
    details: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::load();

    let data_dir = cli
        .data_dir
        .or(config.data_dir)
        .unwrap_or_else(|| PathBuf::from("assets"));
    let mut explorer = Explorer::load(&data_dir).await?;
    let mut surface = RecordingSurface::default();
    explorer.draw(&mut surface);

    if let Some(mode) = cli.mode.or(config.mode) {
        explorer.set_mode(mode, &mut surface);
    }

    println!(
        "{} papers from {}",
        explorer.corpus().len(),
        data_dir.display()
    );
    for (key, mode) in explorer.corpus().modes() {
        let marker = if explorer.mode_key() == Some(key.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{marker} mode {key}: {}", mode.display_name(key));
    }

    if cli.options {
        print_options(&explorer);
        return Ok(());
    }

    let mut criteria = FilterCriteria::default();
    if let Some(years) = &cli.years {
        criteria.years = YearSpec::parse(years);
    }
    if let Some(country) = cli.country {
        criteria.country = Choice::Only(country);
    }
    if let Some(institution) = cli.institution {
        criteria.institution = Choice::Only(institution);
    }
    if let Some(raw) = &cli.label {
        criteria.label = parse_label(raw)?;
    }

    if criteria.is_active() {
        explorer.set_criteria(criteria, &mut surface);
        print_matches(&explorer);
    }

    if let Some(paper_id) = &cli.details {
        // The same path the UI takes: a hit-tested click. A paper hidden by
        // the active filter refuses the lock, like in the plot.
        let event = SurfaceEvent::Click {
            hit: Some(paper_id.clone()),
        };
        match explorer.handle_event(event, &mut surface) {
            Some(panel) => println!("\n{panel}"),
            None => {
                // Distinguish "hidden" from "no such paper".
                explorer.details(paper_id)?;
                println!("\npaper {paper_id} is hidden by the active filter");
            }
        }
    }

    Ok(())
}

fn print_options(explorer: &Explorer) {
    let corpus = explorer.corpus();
    if let Some(hint) = corpus.year_hint() {
        println!("years: {hint}");
    }
    println!("countries: {}", corpus.countries().join(", "));
    println!("institutions: {}", corpus.institutions().join(", "));
    for category in LabelCategory::ALL {
        let values = corpus.label_values(category);
        if !values.is_empty() {
            println!("{}: {}", category.key(), values.join(", "));
        }
    }
}

fn print_matches(explorer: &Explorer) {
    let visible: Vec<_> = explorer
        .corpus()
        .records()
        .iter()
        .zip(explorer.visuals())
        .filter(|(_, visual)| visual.visible)
        .map(|(record, _)| record)
        .collect();

    println!("{} of {} papers match", visible.len(), explorer.corpus().len());
    for record in visible {
        println!(
            "  {}  {}  {}",
            record.paper_id,
            record.year.map_or_else(|| "----".to_string(), |y| y.to_string()),
            record.title.as_deref().unwrap_or("(Untitled)")
        );
    }
}

fn parse_label(raw: &str) -> Result<LabelFilter, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected category=value, got '{raw}'"))?;
    let category = LabelCategory::from_key(key.trim())
        .ok_or_else(|| format!("unknown label category '{}'", key.trim()))?;
    Ok(LabelFilter {
        category: Some(category),
        value: Some(value.trim().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_flag_parses() {
        let filter = parse_label("task=Segmentation").unwrap();
        assert_eq!(filter.category, Some(LabelCategory::Task));
        assert_eq!(filter.value.as_deref(), Some("Segmentation"));
    }

    #[test]
    fn label_flag_rejects_garbage() {
        assert!(parse_label("task").is_err());
        assert!(parse_label("topic=Misc").is_err());
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::RulePipeline;
use selection::{
    catalog, BusinessType, Country, PosPlatform, PosSetup, ReaderType, Recommendation,
    SelectionInput,
};
use std::collections::BTreeMap;

/// pos-advisor - Terminal Hardware Advisor
#[derive(Parser)]
#[command(name = "pos-advisor")]
#[command(about = "Recommends point-of-sale hardware and an integration path", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a hardware and integration recommendation for one selection
    Recommend {
        /// Country the business operates in (US, France, Germany, Australia)
        #[arg(long, default_value_t = Country::Us)]
        country: Country,

        /// Reader category (sPOS for smart readers, mPOS for mobile readers)
        #[arg(long, default_value_t = ReaderType::Spos)]
        reader_type: ReaderType,

        /// Whether payments must keep working without internet connectivity
        #[arg(long)]
        offline_processing: bool,

        /// Point-of-sale setup (separate, all-in-one)
        #[arg(long, default_value_t = PosSetup::Separate)]
        pos_setup: PosSetup,

        /// Platform the POS application runs on (web, android, iOS, iphone, ipad, desktop)
        #[arg(long, default_value_t = PosPlatform::Web)]
        pos_platform: PosPlatform,

        /// How the business sells (countertop, roaming, events, services)
        #[arg(long, default_value_t = BusinessType::Countertop)]
        business_type: BusinessType,

        /// Show which rules fired, in application order
        #[arg(long)]
        explain: bool,

        /// Emit the recommendation as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the reader hardware catalog
    Readers {
        /// Only show readers positioned for this country
        #[arg(long)]
        country: Option<Country>,

        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enumerate the full input domain and summarize distinct outcomes
    Matrix {
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            country,
            reader_type,
            offline_processing,
            pos_setup,
            pos_platform,
            business_type,
            explain,
            json,
        } => {
            let input = SelectionInput {
                country,
                reader_type,
                offline_processing,
                pos_setup,
                pos_platform,
                business_type,
            };
            handle_recommend(&input, explain, json)?
        }
        Commands::Readers { country, json } => handle_readers(country, json)?,
        Commands::Matrix { json } => handle_matrix(json)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(input: &SelectionInput, explain: bool, json: bool) -> Result<()> {
    let pipeline = RulePipeline::standard();
    let trace = pipeline.apply_traced(input);

    if json {
        if explain {
            println!("{}", serde_json::to_string_pretty(&trace)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&trace.recommendation)?);
        }
        return Ok(());
    }

    print_recommendation(&trace.recommendation);

    if explain {
        println!();
        println!("{}", "Rules fired:".bold());
        for name in &trace.fired_rules {
            println!("  {} {}", "•".green(), name);
        }
    }
    Ok(())
}

/// Handle the 'readers' command
fn handle_readers(country: Option<Country>, json: bool) -> Result<()> {
    let models: Vec<&catalog::ReaderModel> = match country {
        Some(country) => catalog::readers_for_country(country).collect(),
        None => catalog::readers().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    println!("{}", "Reader catalog:".bold().blue());
    for model in models {
        let countries = model
            .countries
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} {} [{:?}] ({})",
            "•".green(),
            model.name.bold(),
            model.form_factor,
            countries
        );
        println!("    {}", model.notes);
    }
    Ok(())
}

/// Handle the 'matrix' command
fn handle_matrix(json: bool) -> Result<()> {
    let pipeline = RulePipeline::standard();

    // Group all input combinations by the recommendation they produce.
    let mut outcomes: BTreeMap<(String, String, String), usize> = BTreeMap::new();
    let mut total = 0usize;
    for input in SelectionInput::all() {
        let rec = pipeline.apply(&input);
        *outcomes
            .entry((rec.reader, rec.integration_shape, rec.connectivity))
            .or_insert(0) += 1;
        total += 1;
    }

    if json {
        let entries: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|((reader, shape, connectivity), count)| {
                serde_json::json!({
                    "recommendation": Recommendation {
                        reader: reader.clone(),
                        integration_shape: shape.clone(),
                        connectivity: connectivity.clone(),
                    },
                    "combinations": count,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} distinct outcomes across {} input combinations:",
            outcomes.len(),
            total
        )
        .bold()
        .blue()
    );
    for ((reader, shape, connectivity), count) in &outcomes {
        println!(
            "{} {:>4} x reader: {} | integration: {} | connectivity: {}",
            "•".green(),
            count,
            display_or_none(reader),
            display_or_none(shape),
            display_or_none(connectivity),
        );
    }
    Ok(())
}

/// Helper function to format and print a recommendation
fn print_recommendation(rec: &Recommendation) {
    println!("{}", "Based on your selections, we recommend:".bold().blue());
    println!("{}Reader: {}", "• ".green(), display_or_none(&rec.reader));
    println!(
        "{}Integration Shape: {}",
        "• ".green(),
        display_or_none(&rec.integration_shape)
    );
    println!(
        "{}Connectivity: {}",
        "• ".green(),
        display_or_none(&rec.connectivity)
    );
}

/// Render an empty recommendation field as a visible placeholder.
fn display_or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tagboard_core::constants::DEFAULT_DATA_DIR;
use tagboard_core::{export_tags, Category, FileSlotStorage, Tag, TagStore};

#[derive(Parser)]
#[command(name = "tagboard")]
#[command(about = "Tagboard tag-management CLI")]
struct Cli {
    /// Data directory for the persisted collections
    /// (falls back to TAGBOARD_DATA_DIR, then "tagboard_data")
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tags, most recent first
    Tags,
    /// List all categories in creation order
    Categories,
    /// Add a tag
    AddTag {
        /// Tag name
        name: String,
        /// Category id the tag belongs to
        category: String,
    },
    /// Remove a tag by id
    RemoveTag {
        /// Tag id
        id: String,
    },
    /// Add a category
    AddCategory {
        /// Category name
        name: String,
        /// Styling token for the category
        #[arg(long, default_value = "var(--chart-1)")]
        color: String,
    },
    /// Remove a category by id (tags keep their reference)
    RemoveCategory {
        /// Category id
        id: String,
    },
    /// Show per-category tag counts and percentages
    Summary,
    /// Export the tag collection to video_tags_backup.json
    Export {
        /// Output directory for the export file
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tagboard_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        std::env::var("TAGBOARD_DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.into())
            .into()
    });

    let mut store = TagStore::open(Box::new(FileSlotStorage::new(data_dir)));

    match cli.command {
        // The dashboard's default view: the tag list.
        None | Some(Commands::Tags) => print_tags(&store),
        Some(Commands::Categories) => {
            for category in store.categories() {
                println!("{}  {} ({})", category.id, category.name, category.color);
            }
        }
        Some(Commands::AddTag { name, category }) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                eprintln!("Tag name cannot be empty.");
                std::process::exit(1);
            }
            let tag = store.add_tag(trimmed, category)?;
            println!("Added tag {} ({})", tag.id, tag.name);
        }
        Some(Commands::RemoveTag { id }) => {
            store.remove_tag(&id)?;
            println!("Removed tag {} (if it existed)", id);
        }
        Some(Commands::AddCategory { name, color }) => {
            let category = store.add_category(name, color)?;
            println!("Added category {} ({})", category.id, category.name);
        }
        Some(Commands::RemoveCategory { id }) => {
            store.remove_category(&id)?;
            println!("Removed category {} (if it existed)", id);
        }
        Some(Commands::Summary) => print_summary(store.tags(), store.categories()),
        Some(Commands::Export { out }) => {
            let path = export_tags(&store, &out)?;
            println!("Exported {} tags to {}", store.tags().len(), path.display());
        }
    }

    Ok(())
}

fn print_tags(store: &TagStore) {
    if store.tags().is_empty() {
        println!("No tags.");
        return;
    }

    for tag in store.tags() {
        let category_name = store
            .categories()
            .iter()
            .find(|c| c.id == tag.category)
            .map(|c| c.name.as_str())
            .unwrap_or("(unknown category)");

        println!(
            "{}  {}  [{}]  {}",
            tag.id,
            tag.name,
            category_name,
            format_timestamp(tag.created_at)
        );
    }
}

/// Per-category counts and percentages, derived here rather than in the
/// store. Tags whose category no longer resolves are reported separately.
fn print_summary(tags: &[Tag], categories: &[Category]) {
    let total = tags.len();

    for category in categories {
        let count = tags.iter().filter(|t| t.category == category.id).count();
        println!("{}: {} tags ({})", category.name, count, percentage(count, total));
    }

    let orphaned = tags
        .iter()
        .filter(|t| categories.iter().all(|c| c.id != t.category))
        .count();
    if orphaned > 0 {
        println!(
            "(unknown category): {} tags ({})",
            orphaned,
            percentage(orphaned, total)
        );
    }

    println!("Total: {} tags", total);
}

fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".into();
    }
    format!("{:.1}%", 100.0 * count as f64 / total as f64)
}

fn format_timestamp(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}

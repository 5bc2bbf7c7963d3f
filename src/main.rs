use agency_listings::config::{Config, Source};
use agency_listings::dashboard::DashboardStats;
use agency_listings::leads::Lead;
use agency_listings::listing::{featured, parse_choice, ListingEngine, ListingSession, SortKey};
use agency_listings::models::{OperationType, PropertyRecord, PropertyType};
use agency_listings::store::{JsonFileStore, PropertyStore, RestStore, StoreQuery};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agency-listings")]
#[command(about = "Search and summarize the agency's property catalog")]
struct Cli {
    /// Property source: a JSON file path or the REST endpoint URL
    #[arg(long, global = true)]
    source: Option<String>,

    /// Listings per page, at least 1
    #[arg(long, global = true)]
    page_size: Option<NonZeroUsize>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and page through available listings
    Search {
        /// Matched against title, address and neighborhood
        #[arg(short, long, default_value = "")]
        search: String,
        /// sale, rent or all
        #[arg(long, default_value = "all")]
        operation: String,
        /// house, apartment, commercial, land or all
        #[arg(long = "type", default_value = "all")]
        property_type: String,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        min_bedrooms: Option<u32>,
        #[arg(long)]
        min_bathrooms: Option<u32>,
        /// newest, price-asc, price-desc or views
        #[arg(long, default_value = "newest")]
        sort: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Include sold and rented listings
        #[arg(long)]
        all_statuses: bool,
    },

    /// Featured listings for the home page
    Featured {
        #[arg(long, default_value_t = agency_listings::listing::HOME_FEATURED_LIMIT)]
        limit: usize,
    },

    /// Show one property
    Show { id: String },

    /// Back-office statistics
    Stats {
        /// JSON array of leads to include
        #[arg(long)]
        leads: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(source) = &cli.source {
        config.source = Source::parse(source);
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size.get();
    }

    let store = open_store(&config)?;
    info!("🏠 Using {} property store", store.source_name());

    match cli.command {
        Commands::Search {
            search,
            operation,
            property_type,
            min_price,
            max_price,
            min_bedrooms,
            min_bathrooms,
            sort,
            page,
            all_statuses,
        } => {
            let query = if all_statuses {
                StoreQuery::all()
            } else {
                StoreQuery::public()
            };
            let records = store.list(&query).await.context("Failed to list properties")?;

            let engine = ListingEngine::with_page_size(config.page_size);
            let mut session = ListingSession::with_engine(engine, records);
            session.set_search_term(search);
            session.set_operation_type(
                parse_choice::<OperationType>(&operation).context("Invalid --operation")?,
            );
            session.set_property_type(
                parse_choice::<PropertyType>(&property_type).context("Invalid --type")?,
            );
            session.set_price_range(min_price, max_price);
            session.set_min_bedrooms(min_bedrooms);
            session.set_min_bathrooms(min_bathrooms);
            session.set_sort(sort.parse::<SortKey>().context("Invalid --sort")?);
            session.go_to_page(page);

            let view = session.view();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                info!(
                    "✅ {} properties found, page {} of {}",
                    view.filtered_count, view.page, view.total_pages
                );
                if view.is_empty() {
                    println!("No properties match these filters.");
                }
                print_properties(&view.items, (view.page - 1) * config.page_size);
            }
        }

        Commands::Featured { limit } => {
            let records = store
                .list(&StoreQuery {
                    featured_only: true,
                    ..StoreQuery::public()
                })
                .await
                .context("Failed to list featured properties")?;
            let picked = featured(&records, limit);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&picked)?);
            } else {
                print_properties(&picked, 0);
            }
        }

        Commands::Show { id } => {
            let property = store
                .get(&id)
                .await
                .context("Failed to fetch property")?
                .with_context(|| format!("Property {id} not found"))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&property)?);
            } else {
                print_properties(&[&property], 0);
                if !property.description.is_empty() {
                    println!("   {}", property.description);
                }
            }
        }

        Commands::Stats { leads } => {
            let records = store
                .list(&StoreQuery::all())
                .await
                .context("Failed to list properties")?;
            let leads = match leads {
                Some(path) => load_leads(&path).await?,
                None => Vec::new(),
            };
            let stats = DashboardStats::collect(&records, &leads);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
    }

    Ok(())
}

fn open_store(config: &Config) -> Result<Box<dyn PropertyStore>> {
    let store: Box<dyn PropertyStore> = match &config.source {
        Source::File(path) => Box::new(JsonFileStore::new(path)),
        Source::Rest(url) => Box::new(
            RestStore::with_timeout(url, config.api_key.as_deref(), config.http_timeout)
                .context("Failed to create REST client")?,
        ),
    };
    Ok(store)
}

async fn load_leads(path: &Path) -> Result<Vec<Lead>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Malformed leads in {}", path.display()))
}

fn print_properties(properties: &[&PropertyRecord], offset: usize) {
    for (i, property) in properties.iter().enumerate() {
        println!(
            "{}. {} ({:.0}, {})",
            offset + i + 1,
            property.title,
            property.price,
            property.operation_type
        );
        println!("   {}, {}", property.address, property.neighborhood);
        println!(
            "   {} · {} dorm, {} baños, {} m²",
            property.property_type, property.bedrooms, property.bathrooms, property.area
        );
        println!("   ID: {} · {} · {} views", property.id, property.status, property.views);
        println!();
    }
}

fn print_stats(stats: &DashboardStats) {
    println!("Properties: {}", stats.total_properties);
    println!(
        "   available {}, sold {}, rented {}, featured {}",
        stats.available, stats.sold, stats.rented, stats.featured
    );
    println!("   total views: {}", stats.total_views);
    if let Some(avg) = stats.average_sale_price {
        println!("   average sale price: {avg:.0}");
    }
    if let Some(id) = &stats.most_viewed {
        println!("   most viewed: {id}");
    }
    println!("Leads: {}", stats.total_leads);
    for (status, count) in &stats.leads_by_status {
        println!("   {status}: {count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_rejected_like_the_env_setting() {
        let parsed = Cli::try_parse_from(["agency-listings", "--page-size", "0", "stats"]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["agency-listings", "--page-size", "5", "stats"]).unwrap();
        assert_eq!(cli.page_size.map(NonZeroUsize::get), Some(5));
    }
}

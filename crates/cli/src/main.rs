//! Forge Fitness CLI - Drive the demo storefront from a terminal.
//!
//! Every invocation runs against a fresh session over the demo
//! fixtures; there is no persistence between runs.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog sorted by price
//! forge-fitness catalog list --sort price-low
//!
//! # Search the catalog
//! forge-fitness catalog search kettlebell
//!
//! # Raise one price by 10% and show the history entry
//! forge-fitness price increase 1 10
//!
//! # Apply a 5% cut across the whole catalog
//! forge-fitness price bulk 5 --decrease
//!
//! # Nearest store stock for product 1, as seen from Union Square
//! forge-fitness nearest 1 --lat 40.73 --lng -73.99
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand, ValueEnum};
use forge_fitness_core::{Coordinate, Price, ProductId};
use forge_fitness_storefront::StoreState;
use forge_fitness_storefront::browse::{self, ProductFilters, SortOption};
use forge_fitness_storefront::catalog::Product;
use forge_fitness_storefront::inventory::Resolution;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "forge-fitness")]
#[command(author, version, about = "Forge Fitness storefront demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the demo catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Run pricing-engine operations
    Price {
        #[command(subcommand)]
        action: PriceAction,
    },
    /// Find the nearest store and its stock for a product
    Nearest {
        /// Product id to check
        product_id: String,

        /// Caller latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Caller longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Sort order
        #[arg(short, long, value_enum, default_value = "default")]
        sort: SortArg,

        /// Restrict to one vendor
        #[arg(long)]
        vendor: Option<String>,
    },
    /// Search products by title, tags, vendor, or type
    Search {
        /// Search terms
        query: String,
    },
}

#[derive(Subcommand)]
enum PriceAction {
    /// Set a product's base price
    Set {
        product_id: String,
        /// New base price in dollars
        amount: Decimal,
    },
    /// Raise a product's price by a percentage
    Increase {
        product_id: String,
        percentage: Decimal,
    },
    /// Lower a product's price by a percentage
    Decrease {
        product_id: String,
        percentage: Decimal,
    },
    /// Apply a percentage change to every product
    Bulk {
        percentage: Decimal,

        /// Decrease instead of increase
        #[arg(long)]
        decrease: bool,
    },
}

/// Sort order, mirroring [`SortOption`] for clap.
#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Default,
    PriceLow,
    PriceHigh,
    Name,
    Newest,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Default => Self::Default,
            SortArg::PriceLow => Self::PriceLow,
            SortArg::PriceHigh => Self::PriceHigh,
            SortArg::Name => Self::Name,
            SortArg::Newest => Self::Newest,
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = StoreState::new();

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { sort, vendor } => {
                let filters = ProductFilters {
                    vendor,
                    ..ProductFilters::default()
                };
                let visible = browse::filter_and_sort(state.catalog.products(), &filters, sort.into());
                print_products(&visible);
            }
            CatalogAction::Search { query } => {
                let hits = browse::search(state.catalog.products(), &query);
                print_products(&hits);
                println!("{} match(es)", hits.len());
            }
        },
        Commands::Price { action } => run_price(&mut state, action)?,
        Commands::Nearest {
            product_id,
            lat,
            lng,
        } => {
            let product_id = ProductId::new(product_id);
            let caller = Coordinate::new(lat, lng);
            match state.store_availability(Some(caller), &product_id) {
                Resolution::Resolved { location, on_hand } => {
                    let distance = caller.distance_km(&location.coordinate);
                    println!("{} ({})", location.name, location.address);
                    println!("{distance:.1} km away, {on_hand} in stock");
                }
                Resolution::Pending => println!("no store location available"),
            }
        }
    }

    Ok(())
}

fn run_price(
    state: &mut StoreState,
    action: PriceAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PriceAction::Set { product_id, amount } => {
            let id = ProductId::new(product_id);
            state.catalog.set_price(&id, Price::usd(amount))?;
            print_product_with_history(state, &id);
        }
        PriceAction::Increase {
            product_id,
            percentage,
        } => {
            let id = ProductId::new(product_id);
            state.catalog.increase_price(&id, percentage)?;
            print_product_with_history(state, &id);
        }
        PriceAction::Decrease {
            product_id,
            percentage,
        } => {
            let id = ProductId::new(product_id);
            state.catalog.decrease_price(&id, percentage)?;
            print_product_with_history(state, &id);
        }
        PriceAction::Bulk {
            percentage,
            decrease,
        } => {
            let adjustment = if decrease {
                forge_fitness_core::PriceAdjustment::Decrease
            } else {
                forge_fitness_core::PriceAdjustment::Increase
            };
            state.catalog.bulk_update_prices(percentage, adjustment);
            let products: Vec<&Product> = state.catalog.products().iter().collect();
            print_products(&products);
        }
    }

    Ok(())
}

fn print_products(products: &[&Product]) {
    for product in products {
        println!(
            "{:<4} {:<36} {:>10}  {}",
            product.id.as_str(),
            product.title,
            product.price.display(),
            product.vendor
        );
    }
}

fn print_product_with_history(state: &StoreState, product_id: &ProductId) {
    if let Some(product) = state.catalog.find(product_id) {
        println!("{}: now {}", product.title, product.price.display());
        for variant in &product.variants {
            println!("  {:<20} {:>10}", variant.title, variant.price.display());
        }
    }
    for change in state.catalog.price_history(product_id) {
        println!(
            "  {} -> {} at {}",
            change.old_price.display(),
            change.new_price.display(),
            change.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
}

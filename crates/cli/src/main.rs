//! Almacén CLI - Inventory console for the Almacén backend.
//!
//! # Usage
//!
//! ```bash
//! # Paged product listing with filters
//! almacen products --name lavanda --active true --page 0 --size 25
//!
//! # Stock screens
//! almacen low-stock --threshold 5
//! almacen out-of-stock
//!
//! # Movement history
//! almacen movements --kind SALIDA --from 2026-08-01 --to 2026-08-20
//!
//! # Stock mutations
//! almacen stock set 12 150 --user 3
//! almacen stock adjust 12 -- -5 --user 3
//!
//! # Misc
//! almacen search lav
//! almacen toggle 12
//! almacen export --aroma 4 --out /tmp
//! ```
//!
//! # Environment Variables
//!
//! - `ALMACEN_API_URL` - Base URL of the inventory backend (required)
//! - `ALMACEN_API_TOKEN` - Bearer token (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use almacen_core::{LowStockFilters, MovementFilters, PageRequest, ProductFilters};

mod commands;

#[derive(Parser)]
#[command(name = "almacen")]
#[command(author, version, about = "Almacén inventory console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with filters and pagination
    Products {
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List products at or below a stock threshold
    LowStock {
        /// Upper stock bound (`umbralMaximo`)
        #[arg(long)]
        threshold: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List products with zero stock
    OutOfStock {
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List inventory movements
    Movements {
        #[command(flatten)]
        page: PageArgs,
        /// Movement kind (`tipo`)
        #[arg(long)]
        kind: Option<String>,
        /// Movement reason (`motivo`)
        #[arg(long)]
        reason: Option<String>,
        /// Acting user id
        #[arg(long)]
        user: Option<i64>,
        /// Product id
        #[arg(long)]
        product: Option<i64>,
        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Name-prefix autocomplete lookup
    Search {
        /// Partial product name
        partial: String,
    },
    /// Mutate product stock
    Stock {
        #[command(subcommand)]
        action: StockAction,
    },
    /// Invert a product's active flag
    Toggle {
        /// Product id
        id: i64,
    },
    /// Download the inventory CSV
    Export {
        /// Aroma id filter
        #[arg(long)]
        aroma: Option<i64>,
        /// Family id filter
        #[arg(long)]
        family: Option<i64>,
        /// Active flag filter (true/false; omit for all)
        #[arg(long)]
        active: Option<bool>,
        /// Directory to save the CSV into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum StockAction {
    /// Set stock to an absolute value
    Set {
        /// Product id
        id: i64,
        /// New stock value (must be >= 0)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Acting user id
        #[arg(short, long)]
        user: i64,
    },
    /// Adjust stock by a signed delta (positive adds, negative removes)
    Adjust {
        /// Product id
        id: i64,
        /// Signed delta; zero is a no-op
        #[arg(allow_hyphen_values = true)]
        delta: String,
        /// Acting user id
        #[arg(short, long)]
        user: i64,
    },
}

/// Pagination arguments shared by the paged commands.
#[derive(Args)]
struct PageArgs {
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    page: u32,
    /// Rows per page (10, 25, 50, or 100)
    #[arg(long, default_value_t = almacen_core::DEFAULT_PAGE_SIZE)]
    size: u32,
    /// Server-side sort key
    #[arg(long, default_value = almacen_core::DEFAULT_SORT_KEY)]
    sort: String,
}

/// Product filter arguments shared by the product commands.
#[derive(Args)]
struct FilterArgs {
    /// Name search (`nombre`)
    #[arg(long)]
    name: Option<String>,
    /// Exact SKU
    #[arg(long)]
    sku: Option<String>,
    /// Barcode (`codigoBarras`)
    #[arg(long)]
    barcode: Option<String>,
    /// Aroma id
    #[arg(long)]
    aroma: Option<i64>,
    /// Family id
    #[arg(long)]
    family: Option<i64>,
    /// Active flag (true/false; omit for all)
    #[arg(long)]
    active: Option<bool>,
}

impl PageArgs {
    fn into_request(self) -> Result<PageRequest, commands::CliError> {
        if !PageRequest::is_allowed_size(self.size) {
            return Err(commands::CliError::InvalidArgument(format!(
                "page size {} is not offered (use one of {:?})",
                self.size,
                almacen_core::ALLOWED_PAGE_SIZES
            )));
        }
        Ok(PageRequest {
            page: self.page,
            size: self.size,
            sort_by: self.sort,
        })
    }
}

impl From<FilterArgs> for ProductFilters {
    fn from(args: FilterArgs) -> Self {
        Self {
            name: args.name,
            sku: args.sku,
            barcode: args.barcode,
            aroma_id: args.aroma,
            family_id: args.family,
            active: args.active,
        }
    }
}

#[tokio::main]
async fn main() {
    // Local development convenience; missing .env is fine
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "almacen=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Products { page, filters } => {
            commands::products::list(page.into_request()?, filters.into()).await?;
        }
        Commands::LowStock {
            threshold,
            page,
            filters,
        } => {
            let filters = LowStockFilters {
                product: filters.into(),
                max_threshold: threshold,
            };
            commands::products::low_stock(page.into_request()?, filters).await?;
        }
        Commands::OutOfStock { page, filters } => {
            commands::products::out_of_stock(page.into_request()?, filters.into()).await?;
        }
        Commands::Movements {
            page,
            kind,
            reason,
            user,
            product,
            from,
            to,
        } => {
            let filters = MovementFilters {
                kind,
                reason,
                user_id: user,
                product_id: product,
                from,
                to,
            };
            commands::movements::list(page.into_request()?, filters).await?;
        }
        Commands::Search { partial } => commands::products::search(&partial).await?,
        Commands::Stock { action } => match action {
            StockAction::Set { id, value, user } => {
                commands::stock::set(id, &value, user).await?;
            }
            StockAction::Adjust { id, delta, user } => {
                commands::stock::adjust(id, &delta, user).await?;
            }
        },
        Commands::Toggle { id } => commands::products::toggle(id).await?,
        Commands::Export {
            aroma,
            family,
            active,
            out,
        } => {
            let filters = ProductFilters {
                aroma_id: aroma,
                family_id: family,
                active,
                ..ProductFilters::default()
            };
            commands::export::download(&filters, &out).await?;
        }
    }
    Ok(())
}

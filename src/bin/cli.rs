//! Scholar CLI
//!
//! Browse the scholarship marketplace from the terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scholar::{
    dashboard,
    error::Result,
    models::{Config, Role, Session},
    services::{
        CatalogView, FileScholarshipSource, HttpScholarshipSource, LoadState, ScholarshipSource,
    },
    view::{
        ApplicationStatusCounts, CatalogStats, FacetFilter, ReviewSummary, RoleCounts, SortKey,
    },
};

/// Scholar - Scholarship Marketplace Browser
#[derive(Parser, Debug)]
#[command(name = "scholar", version, about = "Scholarship marketplace browser")]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Where to read the collection from.
#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Read a saved API response instead of calling the API
    #[arg(long)]
    file: Option<PathBuf>,

    /// Bearer token for the API
    #[arg(long, env = "SCHOLAR_TOKEN")]
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List scholarships with search, filters, sorting, and paging
    Browse {
        #[command(flatten)]
        source: SourceArgs,

        /// Match against name, university, or degree
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category to show, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Country to show, or "all"
        #[arg(long, default_value = "all")]
        country: String,

        /// recent, fees-low, or fees-high
        #[arg(long, default_value = "recent")]
        sort: String,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show available categories and countries
    Facets {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show catalog statistics
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show rating figures for one scholarship's reviews
    Reviews {
        /// Scholarship id
        id: String,

        /// Bearer token for the API
        #[arg(long, env = "SCHOLAR_TOKEN")]
        token: Option<String>,
    },

    /// Show user roles and application progress (admin token required)
    Analytics {
        /// Bearer token for the API
        #[arg(long, env = "SCHOLAR_TOKEN")]
        token: Option<String>,
    },

    /// Show dashboard sections for a role
    Dashboard {
        /// admin, moderator, or student
        #[arg(long)]
        role: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_source(config: &Config, args: &SourceArgs) -> Result<Box<dyn ScholarshipSource>> {
    if let Some(path) = &args.file {
        return Ok(Box::new(FileScholarshipSource::new(path)));
    }

    let source = build_http_source(config, args.token.as_deref())?;
    Ok(Box::new(source))
}

fn build_http_source(config: &Config, token: Option<&str>) -> Result<HttpScholarshipSource> {
    let source = HttpScholarshipSource::new(&config.api)?;
    Ok(match token {
        Some(token) => source.with_session(Session::with_token(token)),
        None => source,
    })
}

/// Load the collection into a fresh view, logging the outcome.
async fn load_catalog(config: &Config, args: &SourceArgs) -> Result<CatalogView> {
    let source = build_source(config, args)?;
    let mut catalog = CatalogView::new(config.view.page_size);

    if let LoadState::Failed(reason) = catalog.refresh(source.as_ref()).await {
        log::error!("Failed to load scholarships: {}", reason);
    }
    Ok(catalog)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Read the file before the logger exists, report the outcome after.
    let loaded = Config::load(&cli.config);
    let level = match &loaded {
        Ok(config) => config.logging.level.as_str(),
        Err(_) => "info",
    };
    init_logging(cli.verbose, level);

    let config = match loaded {
        Ok(config) => {
            log::debug!("Loaded configuration from {}", cli.config.display());
            config
        }
        Err(e) if matches!(cli.command, Command::Validate) => {
            log::error!("Config load failed from {}: {}", cli.config.display(), e);
            return Err(e);
        }
        Err(e) => {
            log::warn!(
                "Config load failed from {}: {}. Using defaults.",
                cli.config.display(),
                e
            );
            Config::default()
        }
    };

    match cli.command {
        Command::Browse {
            source,
            search,
            category,
            country,
            sort,
            page,
        } => {
            let sort: SortKey = sort.parse()?;
            let mut catalog = load_catalog(&config, &source).await?;

            let params = catalog.params_mut();
            params.set_search_term(search);
            params.set_category_filter(FacetFilter::parse(&category));
            params.set_country_filter(FacetFilter::parse(&country));
            params.set_sort_key(sort);
            params.set_page_number(page);

            let view = catalog.render();
            if view.is_empty() {
                match catalog.state() {
                    LoadState::Failed(_) => println!("Failed to load scholarships."),
                    _ => println!("No scholarships found matching your criteria."),
                }
            }
            for record in &view.visible_items {
                println!("{}", record.format(&config.view.listing_template));
            }
            println!(
                "-- page {}/{} ({} results)",
                view.page_number, view.total_pages, view.filtered_count
            );
            if view.page_number != page {
                log::warn!(
                    "Page {} is out of range; showing page {}",
                    page,
                    view.page_number
                );
            }
        }

        Command::Facets { source } => {
            let catalog = load_catalog(&config, &source).await?;
            let facets = catalog.collection().facets();

            println!("Categories:");
            for category in &facets.categories {
                println!("    {}", category);
            }
            println!("Countries:");
            for country in &facets.countries {
                println!("    {}", country);
            }
        }

        Command::Stats { source } => {
            let catalog = load_catalog(&config, &source).await?;
            let stats = CatalogStats::from_records(catalog.collection().records());

            println!("Total scholarships: {}", stats.total);
            println!("Free to apply: {}", stats.free_count);
            println!("Total application fees: ${:.2}", stats.total_application_fees);
            println!("Average application fee: ${:.2}", stats.average_fee());
            println!("Total tuition fees: ${:.2}", stats.total_tuition_fees);
            println!("By category:");
            for (category, count) in &stats.category_counts {
                println!("    {}: {}", category, count);
            }
        }

        Command::Reviews { id, token } => {
            let source = build_http_source(&config, token.as_deref())?;
            let reviews = source.fetch_reviews(&id).await?;
            let summary = ReviewSummary::from_reviews(&reviews);

            println!("Reviews: {}", summary.count);
            println!("Average rating: {:.1}", summary.average_rating);
            println!("5-star reviews: {}", summary.five_star_count);
            for review in &reviews {
                println!("    {:.0}/5 {}: {}", review.rating(), review.user_name, review.comment);
            }
        }

        Command::Analytics { token } => {
            let source = build_http_source(&config, token.as_deref())?;
            let roles = RoleCounts::from_users(&source.fetch_users().await?);
            let statuses = ApplicationStatusCounts::from_applications(
                &source.fetch_applications().await?,
            );

            println!("Users:");
            println!("    admin: {}", roles.admin);
            println!("    moderator: {}", roles.moderator);
            println!("    student: {}", roles.student);
            println!("Applications:");
            println!("    pending: {}", statuses.pending);
            println!("    processing: {}", statuses.processing);
            println!("    completed: {}", statuses.completed);
            println!("    rejected: {}", statuses.rejected);
        }

        Command::Dashboard { role } => {
            let dashboard = dashboard::dispatch(Role::from_label(&role));
            println!("{}", dashboard.title);
            for section in dashboard.sections {
                println!("    {}", section);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK (api {}, page size {})",
                config.api.base_url,
                config.view.page_size
            );
        }
    }

    Ok(())
}

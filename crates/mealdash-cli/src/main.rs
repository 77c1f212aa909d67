use clap::Parser;
use mealdash_core::{Catalog, Config, MealDbProvider, PricingTable};
use mealdash_tui::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mealdash")]
#[command(version, about = "Terminal food ordering front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch and print the category list with prices
    Categories,
    /// Look up the price for a category name
    Price {
        /// Category name, e.g. "Seafood"
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mealdash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {}", e);
        Config::default()
    });

    let provider = MealDbProvider::with_base_url(config.catalog.api_url.clone());
    let pricing = PricingTable::with_default_menu();

    match cli.command {
        Some(Commands::Categories) => {
            let catalog = Catalog::load_from(&provider).await;
            if catalog.is_empty() {
                println!("No categories available.");
            }
            for category in catalog.categories() {
                println!("{:<15} {}", category.name, pricing.lookup(&category.name));
            }
        }
        Some(Commands::Price { name }) => {
            println!("{}", pricing.lookup(&name));
        }
        None => {
            let catalog = Catalog::load_from(&provider).await;
            let app = App::new(catalog, pricing);
            mealdash_tui::run_tui(app, &provider, config.ui.mouse_enabled).await?;
        }
    }

    Ok(())
}

use std::env;

use clap::Parser;
use tracing::info;

use nd_core::{Error, Result};
use nd_fetcher::{NewsApiFetcher, SearchQuery};
use nd_inference::models::create_provider;
use nd_inference::enrich_articles;
use nd_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// NewsAPI key. Falls back to the NEWS_API_KEY environment variable.
    #[arg(long)]
    api_key: Option<String>,
    /// Search query
    #[arg(long, default_value = "world")]
    query: String,
    /// Article language
    #[arg(long, default_value = "en")]
    language: String,
    #[arg(
        long,
        default_value = "hf",
        help = "Inference provider. Available providers: hf (default), dummy"
    )]
    model: String,
    /// Hugging Face API token. Falls back to the HF_API_TOKEN environment variable.
    #[arg(long)]
    hf_token: Option<String>,
    /// How many fetched articles to classify and summarize
    #[arg(long, default_value_t = 15)]
    limit: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the digest page over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: String,
    },
    /// Run the pipeline once and print the articles as JSON
    Run,
}

fn build_state(cli: &Cli) -> Result<AppState> {
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| env::var("NEWS_API_KEY").ok())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            Error::Config("News API key is not configured. Pass --api-key or set NEWS_API_KEY.".to_string())
        })?;
    let hf_token = cli
        .hf_token
        .clone()
        .or_else(|| env::var("HF_API_TOKEN").ok())
        .filter(|token| !token.is_empty());

    let provider = create_provider(&cli.model, hf_token)?;
    info!("🧠 Inference provider initialized (using {})", cli.model);

    let mut state = AppState::new(NewsApiFetcher::new()?, provider, api_key);
    state.search = SearchQuery {
        query: cli.query.clone(),
        language: cli.language.clone(),
    };
    state.limit = cli.limit;
    Ok(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let state = build_state(&cli)?;

    match cli.command {
        Commands::Serve { addr } => {
            let app = create_app(state).await;
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .map_err(|e| Error::Config(format!("cannot bind {}: {}", addr, e)))?;
            info!("🌐 Serving news digest on http://{}", addr);
            axum::serve(listener, app)
                .await
                .map_err(|e| Error::External(e.into()))?;
        }
        Commands::Run => {
            let fetched = state.fetcher.fetch(&state.api_key, &state.search).await;
            info!("📰 Fetched {} articles", fetched.len());
            let batch: Vec<_> = fetched.into_iter().take(state.limit).collect();
            let articles = enrich_articles(
                state.provider.as_ref(),
                batch,
                &state.categories,
                &state.summary_options,
            )
            .await;
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
    }

    Ok(())
}

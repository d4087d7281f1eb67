use axum::{
    Router,
    extract::Extension,
    routing::get,
};
use diadiem::annotate::HttpAnnotator;
use diadiem::config::Config;
use diadiem::preprocess::{Preprocessor, SynonymTable};
use diadiem::ranking::TfidfEngine;
use diadiem::search::handlers::{handle_get_location, handle_root, handle_search};
use diadiem::search::SearchService;
use diadiem::store::MemoryStore;
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

fn parse_bind_addr(args: &[String]) -> anyhow::Result<SocketAddr> {
    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--bind requires an <addr:port> value"))?;
                bind_addr = value.parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }
    Ok(bind_addr)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let bind_addr = parse_bind_addr(&args)?;

    let config = Config::from_env();
    tracing::info!("Starting with model dir {:?}", config.model_dir);

    // 1. Annotation sidecar client. A bad URL is fatal: nothing works
    // without query analysis.
    let annotator = Arc::new(HttpAnnotator::from_config(&config)?);

    // 2. Synonym table and preprocessor:
    let synonyms = SynonymTable::load(&config.synonyms_path);
    let preprocessor = Preprocessor::new(annotator, synonyms);

    // 3. Ranking engine. Missing or corrupt artifacts leave the engine
    // not-ready; filter-only queries still work in that state.
    let engine = Arc::new(TfidfEngine::load(&config));
    if !engine.is_ready() {
        tracing::warn!("Ranking engine not ready; textual search disabled");
    }

    // 4. Record store:
    let store = match MemoryStore::load(&config.seed_data_path) {
        Ok(store) => {
            tracing::info!("Loaded {} location records", store.len());
            Arc::new(store)
        }
        Err(err) => {
            tracing::warn!("Seed data unavailable, starting empty: {}", err);
            Arc::new(MemoryStore::from_records(Vec::new()))
        }
    };

    let service = Arc::new(SearchService::new(preprocessor, engine, store));

    // 5. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/api/v1/search", get(handle_search))
        .route("/api/v1/location/:id", get(handle_get_location))
        .layer(Extension(service));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_bind_addr;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bind_defaults_when_flag_absent() {
        let addr = parse_bind_addr(&args(&["diadiem"])).unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_bind_parses_explicit_address() {
        let addr = parse_bind_addr(&args(&["diadiem", "--bind", "127.0.0.1:9999"])).unwrap();
        assert_eq!(addr.port(), 9999);
    }

    #[test]
    fn test_trailing_bind_flag_is_an_error() {
        assert!(parse_bind_addr(&args(&["diadiem", "--bind"])).is_err());
    }
}

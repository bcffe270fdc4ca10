use std::{
    env,
    fs::OpenOptions,
    net::SocketAddr,
    process::ExitCode,
    sync::Arc,
    time::Duration,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use kudi::{
    AppState, PaginationConfig, Session, Theme, build_router, graceful_shutdown,
    logging_middleware,
};

/// The environment variable holding the bearer token sent to the backend.
const API_TOKEN_VAR: &str = "KUDI_API_TOKEN";

/// The environment variable holding the name shown in the navigation bar.
const USERNAME_VAR: &str = "KUDI_USERNAME";

/// The web server for kudi.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the transactions backend, e.g. "http://localhost:8080".
    #[arg(long)]
    backend_url: String,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical timezone used to display dates, e.g. "Africa/Lagos".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// How long to wait for the backend before giving up, in seconds.
    #[arg(long, default_value_t = 10)]
    request_timeout_secs: u64,

    /// The number of transactions to show per page.
    #[arg(long, default_value_t = PaginationConfig::default().default_page_size)]
    page_size: usize,

    /// The colour theme for rendered pages.
    #[arg(long, value_enum, default_value_t = Theme::System)]
    theme: Theme,

    /// File path to write the debug log to.
    #[arg(long, default_value = "debug.log")]
    log_path: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_path) {
        eprintln!("Could not set up logging: {error}");
        return ExitCode::FAILURE;
    }

    let session = Session::new(
        env::var(API_TOKEN_VAR).ok().filter(|token| !token.is_empty()),
        env::var(USERNAME_VAR).ok().filter(|name| !name.is_empty()),
        args.theme,
    );
    let pagination_config = PaginationConfig {
        default_page_size: args.page_size.max(1),
        ..Default::default()
    };

    let state = match AppState::new(
        &args.backend_url,
        session,
        &args.timezone,
        pagination_config,
        Duration::from_secs(args.request_timeout_secs),
    ) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not start the server: {error}");
            return ExitCode::FAILURE;
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!(
        "HTTP server listening on {addr}, reading transactions from {}",
        args.backend_url
    );

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped unexpectedly: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging(log_path: &str) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}

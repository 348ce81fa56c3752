use anyhow::{bail, Context};
use clap::Parser;
use countrydetail::{
    api::{router, AppState},
    browse::browse,
    cli::Args,
    config::Config,
    render::render_not_found,
    services::{
        detail::{CountryDetail, CountryDetailController},
        rest_countries::RestCountriesClient,
    },
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Arc::new(Config::from_env().context("Failed to load configuration")?);

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let client =
        RestCountriesClient::from_config(&config).context("Failed to create HTTP client")?;

    if args.serve {
        return serve(config, client).await;
    }

    let Some(country) = args.country.as_deref() else {
        bail!("A country name is required unless --serve is given");
    };

    let controller = CountryDetailController::new(client);

    if args.json {
        match controller.show(country, None).await {
            CountryDetail::Loaded(view) => println!("{}", serde_json::to_string_pretty(&view)?),
            _ => {
                eprintln!("{}", render_not_found());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    browse(&controller, country, &args)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))
}

async fn serve(config: Arc<Config>, client: RestCountriesClient) -> anyhow::Result<()> {
    let app = router(AppState {
        config: config.clone(),
        client,
    });

    let address = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Signal received, starting graceful shutdown");
}

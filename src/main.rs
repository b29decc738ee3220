use anyhow::Result;
use polyaxon_dashboard::http;
use polyaxon_dashboard::rpc::{handle_request, parse_error, RpcRequest};
use polyaxon_dashboard::{DashboardConfig, DashboardServer};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = DashboardConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("polyaxon_dashboard={}", config.server.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }
    tracing::info!(
        "Configuration loaded: transport={}, port={}, base_url={}",
        config.server.transport,
        config.server.port,
        config.api.base_url
    );

    let server = DashboardServer::new(config.clone());
    tracing::info!("Available tools: {}", server.get_tools().len());

    match config.server.transport.to_lowercase().as_str() {
        "http" => {
            http::run_http_server(server, config.server.port).await?;
            Ok(())
        }
        _ => {
            tracing::info!("Polyaxon dashboard helpers running with stdio transport");

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let mut reader = BufReader::new(stdin);
            let mut line = String::new();

            loop {
                line.clear();
                match reader.read_line(&mut line).await {
                    Ok(0) => break, // EOF
                    Ok(_) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }

                        tracing::debug!("Received: {}", line);

                        let response = match serde_json::from_str::<RpcRequest>(line) {
                            Ok(request) => handle_request(&server, request).await,
                            Err(e) => {
                                tracing::error!("Failed to parse request: {}", e);
                                parse_error(e)
                            }
                        };

                        let response_json = serde_json::to_string(&response)?;
                        tracing::debug!("Sending: {}", response_json);

                        stdout.write_all(response_json.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;
                    }
                    Err(e) => {
                        tracing::error!("Error reading from stdin: {}", e);
                        break;
                    }
                }
            }

            tracing::info!("Polyaxon dashboard helpers shutting down");
            Ok(())
        }
    }
}

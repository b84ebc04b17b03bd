use std::env;
use std::error::Error;
use std::path::PathBuf;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, FederalTaxConfig};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone)]
struct Settings {
    host: String,
    port: u16,
    config_dir: Option<PathBuf>,
}

impl Settings {
    fn from_env() -> Result<Self, Box<dyn Error>> {
        dotenvy::dotenv().ok();

        let port = env::var("PAYROLL_PORT").unwrap_or_else(|_| "3000".to_string());
        Ok(Self {
            host: env::var("PAYROLL_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: port
                .parse()
                .map_err(|e| format!("PAYROLL_PORT must be a valid port number, got '{}': {}", port, e))?,
            config_dir: env::var_os("PAYROLL_CONFIG_DIR").map(PathBuf::from),
        })
    }

    fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payroll_engine=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;

    let config = match &settings.config_dir {
        Some(dir) => ConfigLoader::load(dir)?.into_config(),
        None => {
            info!("PAYROLL_CONFIG_DIR not set, using built-in tax tables");
            FederalTaxConfig::builtin()
        }
    };

    let app = create_router(AppState::new(config)).layer(TraceLayer::new_for_http());

    let addr = settings.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Payroll engine listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

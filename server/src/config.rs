// storefront_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub app_base_url: String,

  // Checkout pricing
  pub tax_rate_bps: u32, // Tax as basis points of the subtotal (825 = 8.25%)

  // Example mock email config
  pub mock_email_sender: String,

  // Shared secret expected in the X-Webhook-Signature header; when unset,
  // webhook sources are accepted unsigned (local development only).
  pub webhook_shared_secret: Option<String>,

  // Optional: for seeding the product catalog on startup
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let app_base_url = get_env("APP_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));

    let tax_rate_bps = get_env("TAX_RATE_BPS")
      .unwrap_or_else(|_| "0".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid TAX_RATE_BPS: {}", e)))?;

    let mock_email_sender = get_env("MOCK_EMAIL_SENDER").unwrap_or_else(|_| "noreply@example.com".to_string());
    let webhook_shared_secret = get_env("WEBHOOK_SHARED_SECRET").ok().filter(|s| !s.is_empty());

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");
    // Avoid logging secrets in production directly, or use redacted logging.

    Ok(Self {
      server_host,
      server_port,
      database_url,
      app_base_url,
      tax_rate_bps,
      mock_email_sender,
      webhook_shared_secret,
      seed_db,
    })
  }
}

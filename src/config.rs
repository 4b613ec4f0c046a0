use anyhow::{Context, Result};

/// Process configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://academic_records.db".to_string());
        let host = std::env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("Invalid PORT")?;
        let seed_sample_data = std::env::var("SEED_SAMPLE_DATA")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .context("Invalid SEED_SAMPLE_DATA (expected true or false)")?;

        Ok(Self {
            database_url,
            host,
            port,
            seed_sample_data,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

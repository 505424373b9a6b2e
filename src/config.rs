use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use clap::Parser;

use crate::errors::{InfrastructureError, InfrastructureResult};

/// Word bingo HTTP server
#[derive(Parser, Debug, Clone)]
#[command(name = "word-bingo")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// IP address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Directory holding banco_SP.txt, banco_EN.txt, banco_PT.txt and banco_DT.txt
    #[arg(short, long, default_value = "word_banks")]
    pub word_banks: PathBuf,

    /// Origin allowed to call the API from a browser (repeatable)
    #[arg(
        long = "allowed-origin",
        default_values_t = [
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    )]
    pub allowed_origins: Vec<String>,

    /// Seed for round order generation; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> InfrastructureResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                InfrastructureError::configuration(format!("invalid bind address {}: {}", self.host, e))
            })
    }

    pub fn origin_headers(&self) -> InfrastructureResult<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| {
                    InfrastructureError::configuration(format!("invalid origin {}: {}", origin, e))
                })
            })
            .collect()
    }
}

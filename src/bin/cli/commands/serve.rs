use anyhow::{anyhow, Context, Result};

use crate::app::App;

pub fn run(app: &App, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| app.config.server.host.clone());
    let port = port.unwrap_or(app.config.server.port);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime
        .block_on(lexicon_lib::server::serve(app.vocabulary.clone(), &host, port))
        .map_err(|e| anyhow!("Server error: {}", e))
}

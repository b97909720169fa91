use anyhow::Context;
use dotenvy::dotenv;
use std::{
    env,
    io::{self, IsTerminal},
    sync::Arc,
};
use tokio::io::BufReader;
use tracing::{debug, info};

use common::{ClientConfig, logger};
use market_data::{BiasRequestClient, BiasSession, HttpTransport, PairCatalogLoader};
use presenter::{CatalogView, Renderer, TextRenderer};

use crate::services::BiasConsole;

mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger();
    debug!("Market bias client starting up...");

    let config = ClientConfig::from_env().context("Invalid client configuration")?;
    info!("Using analysis service at {}", config.base_url);

    let transport =
        Arc::new(HttpTransport::new(&config).context("Failed to build the HTTP client")?);

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut renderer = TextRenderer::new(stdout.lock(), color);

    let catalog = PairCatalogLoader::new(transport.clone()).load_catalog().await;
    renderer.show_catalog(&CatalogView::from_result(&catalog))?;

    let session = BiasSession::new(Arc::new(BiasRequestClient::new(transport)));
    let mut console = BiasConsole::new(session, renderer);

    let symbols: Vec<String> = env::args().skip(1).collect();
    if symbols.is_empty() {
        console
            .run_lines(BufReader::new(tokio::io::stdin()))
            .await?;
    } else {
        console.run_all(&symbols).await?;
    }

    Ok(())
}

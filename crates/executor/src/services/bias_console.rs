use std::io;

use market_data::{BiasSession, SessionOutcome};
use presenter::{Renderer, present};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// Drives one user action at a time: submit, then render whatever came back.
pub struct BiasConsole<R: Renderer> {
    session: BiasSession,
    renderer: R,
}

impl<R: Renderer> BiasConsole<R> {
    pub fn new(session: BiasSession, renderer: R) -> Self {
        Self { session, renderer }
    }

    #[cfg(test)]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub async fn handle(&mut self, symbol: &str) -> io::Result<()> {
        if !symbol.trim().is_empty() {
            self.renderer.show_loading(symbol)?;
        }

        match self.session.submit(symbol).await {
            SessionOutcome::Loaded(result) => self.renderer.apply(&present(&result)),
            SessionOutcome::Failed(err) => self.renderer.show_error(&err),
            SessionOutcome::Stale => {
                debug!("Skipping stale result for {}", symbol.trim());
                Ok(())
            }
        }
    }

    pub async fn run_all(&mut self, symbols: &[String]) -> io::Result<()> {
        for symbol in symbols {
            self.handle(symbol).await?;
        }
        Ok(())
    }

    /// One request per input line until EOF.
    pub async fn run_lines<I>(&mut self, input: I) -> io::Result<()>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            self.handle(&line).await?;
        }
        info!("Input closed. Stopping console.");
        Ok(())
    }
}

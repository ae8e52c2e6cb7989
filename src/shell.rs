use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::protocol::{CommandFactory, Parser, Reply};
use crate::store::Store;

/// Line-oriented command shell over a shared store
pub struct Shell {
    cmd_factory: Arc<CommandFactory>,
    store: Arc<Store>,
    prompt: Option<String>,
}

impl Shell {
    /// Create a shell driving `store`
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            cmd_factory: Arc::new(CommandFactory::init()),
            store,
            prompt: None,
        }
    }

    /// Print `prompt` before reading each line
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Get the store this shell drives
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Process one input line and return its reply, or `None` for a blank line
    pub async fn process_line(&self, line: &str) -> Option<Reply> {
        let Some(args) = Parser::parse(line) else {
            warn!("Unbalanced quotes in input: {:?}", line);
            return Some(Reply::error("ERR unbalanced quotes"));
        };
        if args.is_empty() {
            return None;
        }

        debug!("Received command: {:?}", args);
        Some(self.cmd_factory.execute(&args, &self.store).await)
    }

    /// Read commands from `reader` until EOF, writing each reply to `writer`.
    ///
    /// Returns the number of commands processed.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut processed = 0;

        loop {
            if let Some(prompt) = &self.prompt {
                writer.write_all(prompt.as_bytes()).await?;
                writer.flush().await?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };

            if let Some(reply) = self.process_line(&line).await {
                processed += 1;
                let mut encoded = reply.encode();
                encoded.push('\n');
                writer.write_all(encoded.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("Session ended after {} commands", processed);
        Ok(processed)
    }
}

//! Local line-oriented shell over a [`CommandExecutor`]
//!
//! Runs the same commands as the HTTP service without a network hop.
//! `exit` or `quit` ends the session, as does end of input.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::CommandExecutor;
use crate::error::Result;

const WELCOME: &str = "Welcome to WebTerm (workspace root only). Type 'help', or 'exit' to quit.";

/// Read commands from `input` until `exit`, `quit` or end of input
pub async fn run<R, W>(executor: &mut CommandExecutor, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{}\n", WELCOME).as_bytes()).await?;
    let mut lines = input.lines();

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\nExiting.\n").await?;
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let result = executor.execute(line).await;
        output.write_all(result.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }

    output.flush().await?;
    Ok(())
}

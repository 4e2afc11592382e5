//! Line input abstraction for the session loop.
//!
//! Prompted games block on one line of input per turn. The trait keeps the
//! loop testable without a terminal: production reads stdin, tests replay a
//! scripted list of lines.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tracing::debug;

use crate::error::{Result, TidepoolError};

/// Trait for line input sources (real stdin or scripted)
#[async_trait]
pub trait LineInput: Send {
    /// Read one line, without the trailing newline. `None` means the stream
    /// is closed.
    async fn read_line(&mut self) -> Result<Option<String>>;
}

/// Production input source reading standard input.
pub struct StdinInput {
    reader: BufReader<Stdin>,
}

impl StdinInput {
    /// Create a new StdinInput over this process's stdin.
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineInput for StdinInput {
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line).await {
            Ok(0) => {
                debug!("stdin stream closed");
                Ok(None)
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(Some(line))
            }
            Err(e) => Err(TidepoolError::InputError(e)),
        }
    }
}

/// Scripted input source for deterministic testing.
///
/// Replays the given lines in order, then reports end of stream.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedInput {
    /// Create a ScriptedInput from anything yielding line-like strings.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl LineInput for ScriptedInput {
    async fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_input_replays_lines_then_closes() {
        let mut input = ScriptedInput::new(["kelp", "exit"]);
        assert_eq!(input.read_line().await.unwrap(), Some("kelp".to_string()));
        assert_eq!(input.read_line().await.unwrap(), Some("exit".to_string()));
        assert_eq!(input.read_line().await.unwrap(), None);
        // Stays closed
        assert_eq!(input.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_scripted_input_empty_script_is_closed() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        assert_eq!(input.read_line().await.unwrap(), None);
    }
}

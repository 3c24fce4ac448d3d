//! Local credential storage for the bot's Discord token
//!
//! The token lives in a plain-text file under the user's configuration
//! directory. When the file is missing the service prompts on stdin and
//! persists the answer, so the next start picks it up silently.

use crate::error::PredictionError;
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name the token is stored under inside the configuration directory
pub const TOKEN_FILE_NAME: &str = "discord_token.txt";

/// Handle to the on-disk credential location
#[derive(Debug, Clone)]
pub struct CredentialStore {
    config_dir: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at the given configuration directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Create a store at the default location
    ///
    /// `INHOUSE_CONFIG_DIR` overrides the location; otherwise the store
    /// lives at `$HOME/.config/rift-room`.
    pub fn from_env() -> crate::error::Result<Self> {
        if let Ok(dir) = env::var("INHOUSE_CONFIG_DIR") {
            return Ok(Self::new(dir));
        }

        let home = env::var("HOME").map_err(|_| PredictionError::CredentialError {
            message: "Cannot locate the configuration directory: HOME is not set".to_string(),
        })?;

        Ok(Self::new(
            Path::new(&home).join(".config").join("rift-room"),
        ))
    }

    /// Path of the token file
    pub fn token_path(&self) -> PathBuf {
        self.config_dir.join(TOKEN_FILE_NAME)
    }

    /// Read the stored token
    ///
    /// Returns `None` when the token file does not exist or holds only
    /// whitespace. Any other I/O failure is an error.
    pub fn load_token(&self) -> crate::error::Result<Option<String>> {
        match fs::read_to_string(self.token_path()) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PredictionError::CredentialError {
                message: format!(
                    "Failed to read token file {}: {}",
                    self.token_path().display(),
                    e
                ),
            }
            .into()),
        }
    }

    /// Persist a token, creating the configuration directory if needed
    pub fn store_token(&self, token: &str) -> crate::error::Result<()> {
        fs::create_dir_all(&self.config_dir).map_err(|e| PredictionError::CredentialError {
            message: format!(
                "Failed to create configuration directory {}: {}",
                self.config_dir.display(),
                e
            ),
        })?;

        fs::write(self.token_path(), token).map_err(|e| PredictionError::CredentialError {
            message: format!(
                "Failed to write token file {}: {}",
                self.token_path().display(),
                e
            ),
        })?;

        info!("Stored Discord token at {}", self.token_path().display());
        Ok(())
    }

    /// Load the stored token, prompting on stdin when absent
    pub fn load_or_prompt(&self) -> crate::error::Result<String> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.load_or_prompt_from(&mut stdin.lock(), &mut stdout)
    }

    /// Load the stored token, prompting through the given reader and writer
    ///
    /// The prompted token is trimmed and persisted before being returned.
    /// An empty answer is a credential error.
    pub fn load_or_prompt_from<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> crate::error::Result<String> {
        if let Some(token) = self.load_token()? {
            return Ok(token);
        }

        writeln!(writer, "Discord token not found.")?;
        writeln!(
            writer,
            "If you don't have one, you can create it at https://discord.com/developers/applications"
        )?;
        writeln!(
            writer,
            "It will be stored in plain text at {}",
            self.token_path().display()
        )?;
        writeln!(writer, "Please enter the bot's Discord token:")?;
        writer.flush()?;

        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| PredictionError::CredentialError {
                message: format!("Failed to read token from input: {}", e),
            })?;

        let token = line.trim().to_string();
        if token.is_empty() {
            return Err(PredictionError::CredentialError {
                message: "No token was entered".to_string(),
            }
            .into());
        }

        self.store_token(&token)?;
        Ok(token)
    }
}

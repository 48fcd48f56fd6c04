// src/config.rs
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, PageId};
use clap::Parser;

pub const API_TOKEN_VAR: &str = "NOTION_API_TOKEN";
pub const DATABASE_ID_VAR: &str = "DATABASE_ID";
pub const PAGE_ID_VAR: &str = "PAGE_ID";

/// Parsed command-line input.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Walks through create/read/update/delete calls against the Notion API", long_about = None)]
pub struct CommandLineInput {
    /// Page to create the examples under (URL or ID). Overrides PAGE_ID.
    #[arg(long)]
    pub page_id: Option<String>,

    /// Existing database to query (URL or ID). Overrides DATABASE_ID.
    #[arg(long)]
    pub database_id: Option<String>,

    /// Delete the blocks appended by the block examples once they have run
    #[arg(long, default_value_t = false)]
    pub cleanup: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration, validated once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ExampleConfig {
    pub api_key: ApiKey,
    pub page_id: Option<PageId>,
    pub database_id: Option<DatabaseId>,
    pub cleanup: bool,
    pub verbose: bool,
}

impl ExampleConfig {
    /// Resolves configuration from a `.env` file, the environment and the CLI.
    ///
    /// Command-line ids take precedence over environment ids.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_values(
            std::env::var(API_TOKEN_VAR).ok(),
            cli.page_id.or_else(|| std::env::var(PAGE_ID_VAR).ok()),
            cli.database_id
                .or_else(|| std::env::var(DATABASE_ID_VAR).ok()),
            cli.cleanup,
            cli.verbose,
        )
    }

    /// Builds a configuration from raw values. Blank ids count as absent.
    pub fn from_values(
        api_token: Option<String>,
        page_id: Option<String>,
        database_id: Option<String>,
        cleanup: bool,
        verbose: bool,
    ) -> Result<Self, AppError> {
        let api_token = api_token.ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set",
                API_TOKEN_VAR
            ))
        })?;

        Ok(Self {
            api_key: ApiKey::new(api_token)?,
            page_id: parse_optional_id(page_id)?,
            database_id: parse_optional_id(database_id)?,
            cleanup,
            verbose,
        })
    }
}

fn parse_optional_id<T>(raw: Option<String>) -> Result<Option<crate::types::Id<T>>, AppError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Ok(Some(crate::types::Id::parse(value)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    const PAGE: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn missing_token_is_reported() {
        let err = ExampleConfig::from_values(None, None, None, false, false).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(ref msg) if msg.contains(API_TOKEN_VAR)));
    }

    #[test]
    fn blank_token_is_invalid() {
        let err =
            ExampleConfig::from_values(Some("   ".to_string()), None, None, false, false)
                .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidApiKey { .. })
        ));
    }

    #[test]
    fn empty_ids_count_as_absent() {
        let config = ExampleConfig::from_values(
            Some("secret_token".to_string()),
            Some(String::new()),
            Some("  ".to_string()),
            false,
            false,
        )
        .unwrap();
        assert!(config.page_id.is_none());
        assert!(config.database_id.is_none());
    }

    #[test]
    fn page_url_is_accepted_as_id() {
        let config = ExampleConfig::from_values(
            Some("secret_token".to_string()),
            Some(format!("https://www.notion.so/My-Page-{}", PAGE)),
            None,
            true,
            false,
        )
        .unwrap();
        assert_eq!(config.page_id.unwrap().as_str(), PAGE);
        assert!(config.cleanup);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let err = ExampleConfig::from_values(
            Some("secret_token".to_string()),
            None,
            Some("not-an-id".to_string()),
            false,
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidId(_))
        ));
    }
}

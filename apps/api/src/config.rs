use anyhow::{bail, Context, Result};

/// Which prompt strategy this deployment runs.
///
/// Exactly one mode is active per deployment — the strategy is picked once
/// at startup and never varies per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// Free-context proposals per sub-topic, no constraints.
    Minimal,
    /// Adds the strategic-alignment block and cross-references every
    /// proposal against it.
    ContextAware,
    /// Echoes each field's current context and asks for its opposite.
    Avoidance,
}

impl PromptMode {
    fn parse(raw: &str) -> Result<Self> {
        match raw {
            "minimal" => Ok(PromptMode::Minimal),
            "context" | "context-aware" => Ok(PromptMode::ContextAware),
            "avoidance" => Ok(PromptMode::Avoidance),
            other => bail!(
                "PROMPT_STRATEGY must be one of 'minimal', 'context', 'avoidance' (got '{other}')"
            ),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub data_dir: String,
    pub prompt_mode: PromptMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            prompt_mode: PromptMode::parse(
                &std::env::var("PROMPT_STRATEGY").unwrap_or_else(|_| "avoidance".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mode_parses_known_values() {
        assert_eq!(PromptMode::parse("minimal").unwrap(), PromptMode::Minimal);
        assert_eq!(
            PromptMode::parse("context").unwrap(),
            PromptMode::ContextAware
        );
        assert_eq!(
            PromptMode::parse("context-aware").unwrap(),
            PromptMode::ContextAware
        );
        assert_eq!(
            PromptMode::parse("avoidance").unwrap(),
            PromptMode::Avoidance
        );
    }

    #[test]
    fn test_prompt_mode_rejects_unknown_value() {
        assert!(PromptMode::parse("aggressive").is_err());
    }
}

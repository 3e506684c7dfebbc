//! Generation Orchestrator — wires the composed instruction document and
//! the deployment's fixed system instruction into a single call to the
//! external generation capability.
//!
//! Flow: validate area → build typed context → compose → one LLM call →
//! forward the raw text keyed by area. No post-processing, no retry: a
//! failed call is reported whole, then dropped.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::areas::{
    Area, AreaContext, BtlContext, DigitalContext, IdeasContext, TradeContext,
};
use crate::generation::strategy::PromptStrategy;
use crate::llm_client::GenerationClient;

/// Deployment-wide token ceiling for the generation call.
pub const MAX_TOKENS: u32 = 2000;
/// Deployment-wide sampling temperature — high on purpose, the service
/// exists to produce unconventional output.
pub const TEMPERATURE: f32 = 0.9;

// ────────────────────────────────────────────────────────────────────────────
// Request model
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /generar`.
///
/// Exactly one of the per-area sections is consulted, chosen by
/// `area_solicitada`; a missing section degrades to all-empty fields.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub area_solicitada: String,
    #[serde(default)]
    pub btl: Option<BtlContext>,
    #[serde(default)]
    pub trade: Option<TradeContext>,
    #[serde(default)]
    pub digital: Option<DigitalContext>,
    #[serde(default)]
    pub ideas: Option<IdeasContext>,
    /// Previously generated idea texts supplied back by the caller to steer
    /// the next generation away from repetition.
    #[serde(default)]
    pub ideas_previas: Vec<String>,
}

impl GenerateRequest {
    /// Resolves the requested area and extracts its typed context.
    /// Unknown areas are a caller error; the generation capability is
    /// never invoked for them.
    pub fn into_context(self) -> Result<(AreaContext, Vec<String>), AppError> {
        let area: Area = self.area_solicitada.parse()?;
        let context = match area {
            Area::Btl => AreaContext::Btl(self.btl.unwrap_or_default()),
            Area::Trade => AreaContext::Trade(self.trade.unwrap_or_default()),
            Area::Digital => AreaContext::Digital(self.digital.unwrap_or_default()),
            Area::Ideas => AreaContext::Ideas(self.ideas.unwrap_or_default()),
        };
        Ok((context, self.ideas_previas))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one generation request end to end and returns `{"<area>": text}`
/// with the generated text forwarded unmodified.
pub async fn generate_ideas(
    llm: &dyn GenerationClient,
    strategy: &dyn PromptStrategy,
    request: GenerateRequest,
) -> Result<Value, AppError> {
    let (context, prior) = request.into_context()?;
    let area = context.area();
    debug!("Generando ideas para área: {area}");

    let document = strategy.compose(&context, &prior);

    let text = llm
        .generate(
            strategy.system_instruction(),
            &document,
            MAX_TOKENS,
            TEMPERATURE,
        )
        .await?;

    info!("Generation succeeded for area {area} ({} chars)", text.len());

    Ok(json!({ area.as_str(): text }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromptMode;
    use crate::generation::strategy::strategy_for;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every call and replays a canned response.
    struct StubClient {
        calls: Mutex<Vec<(String, String, u32, f32)>>,
        response: Result<String, String>,
    }

    impl StubClient {
        fn returning(text: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response: Ok(text.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response: Err(message.to_string()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GenerationClient for StubClient {
        async fn generate(
            &self,
            system: &str,
            prompt: &str,
            max_tokens: u32,
            temperature: f32,
        ) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push((
                system.to_string(),
                prompt.to_string(),
                max_tokens,
                temperature,
            ));
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(LlmError::Api {
                    status: 500,
                    message: msg.clone(),
                }),
            }
        }
    }

    fn ideas_request() -> GenerateRequest {
        serde_json::from_value(json!({
            "area_solicitada": "ideas",
            "ideas": {
                "solicitud": "lanzamiento de bebida energética",
                "no-queremos": "activaciones en gimnasios"
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_generated_text_is_forwarded_unmodified() {
        let llm = StubClient::returning("IDEA 1: bar de siestas energizantes");
        let strategy = strategy_for(PromptMode::Avoidance);

        let result = generate_ideas(&llm, strategy.as_ref(), ideas_request())
            .await
            .unwrap();

        assert_eq!(
            result,
            json!({ "ideas": "IDEA 1: bar de siestas energizantes" })
        );
    }

    #[tokio::test]
    async fn test_capability_invoked_exactly_once_with_composed_document() {
        let llm = StubClient::returning("IDEA 1: ...");
        let strategy = strategy_for(PromptMode::Avoidance);

        generate_ideas(&llm, strategy.as_ref(), ideas_request())
            .await
            .unwrap();

        let calls = llm.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "exactly one generation call per request");
        let (system, prompt, max_tokens, temperature) = &calls[0];
        assert_eq!(system, strategy.system_instruction());
        assert!(prompt.contains("lanzamiento de bebida energética"));
        assert!(prompt.contains("activaciones en gimnasios"));
        assert_eq!(*max_tokens, MAX_TOKENS);
        assert_eq!(*temperature, TEMPERATURE);
    }

    #[tokio::test]
    async fn test_unknown_area_never_reaches_the_capability() {
        let llm = StubClient::returning("nunca");
        let strategy = strategy_for(PromptMode::Avoidance);
        let request: GenerateRequest =
            serde_json::from_value(json!({ "area_solicitada": "foo" })).unwrap();

        let err = generate_ideas(&llm, strategy.as_ref(), request)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidArea));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_section_degrades_to_empty_fields() {
        let llm = StubClient::returning("PROPUESTA 1: ...");
        let strategy = strategy_for(PromptMode::Avoidance);
        let request: GenerateRequest =
            serde_json::from_value(json!({ "area_solicitada": "trade" })).unwrap();

        let result = generate_ideas(&llm, strategy.as_ref(), request).await;
        assert!(result.is_ok(), "missing fields are never an error");
    }

    #[tokio::test]
    async fn test_generation_failure_surfaces_the_underlying_message() {
        let llm = StubClient::failing("quota exceeded");
        let strategy = strategy_for(PromptMode::Avoidance);

        let err = generate_ideas(&llm, strategy.as_ref(), ideas_request())
            .await
            .unwrap_err();

        match err {
            AppError::Generation(msg) => assert!(msg.contains("quota exceeded")),
            other => panic!("expected Generation error, got {other:?}"),
        }
        assert_eq!(llm.call_count(), 1, "no retry on failure");
    }

    #[tokio::test]
    async fn test_prior_artifacts_flow_into_the_document() {
        let llm = StubClient::returning("IDEA 1: ...");
        let strategy = strategy_for(PromptMode::Avoidance);
        let request: GenerateRequest = serde_json::from_value(json!({
            "area_solicitada": "ideas",
            "ideas": { "solicitud": "algo nuevo" },
            "ideas_previas": ["IDEA 1: carrera de baristas"]
        }))
        .unwrap();

        generate_ideas(&llm, strategy.as_ref(), request).await.unwrap();

        let calls = llm.calls.lock().unwrap();
        assert!(calls[0].1.contains("IDEA 1: carrera de baristas"));
    }
}

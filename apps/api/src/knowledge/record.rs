//! Persisted knowledge-record shapes.
//!
//! One record per area key, replaced wholesale on every upload. The JSON on
//! disk is the canonical, human-readable form of a brief submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder client name — the normalizer does not attempt to extract a
/// real client from the raw case text.
pub const CLIENTE_PLACEHOLDER: &str = "Cliente no especificado";
pub const DESCRIPCION_PLACEHOLDER: &str = "Caso de estudio registrado desde carga manual";
pub const RESULTADOS_PLACEHOLDER: &str = "Resultados no detallados";

/// One case-study entry: the raw project paragraph plus fixed placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasoExito {
    pub cliente: String,
    pub proyecto: String,
    pub descripcion: String,
    pub resultados: String,
}

impl CasoExito {
    pub fn from_paragraph(proyecto: String) -> Self {
        Self {
            cliente: CLIENTE_PLACEHOLDER.to_string(),
            proyecto,
            descripcion: DESCRIPCION_PLACEHOLDER.to_string(),
            resultados: RESULTADOS_PLACEHOLDER.to_string(),
        }
    }
}

/// The fixed key-element triad of a brief.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementosClave {
    pub experiencia: String,
    pub interaccion: String,
    pub viralidad: String,
}

/// A normalized, persisted summary of a campaign brief / case-study
/// submission for one area key. Last write wins; no merge, no versioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    /// Caller-supplied area key, trimmed but otherwise verbatim.
    pub area: String,
    pub descripcion_general: String,
    /// Order-preserving, one entry per non-empty line of the submission.
    pub objetivos: Vec<String>,
    pub elementos_clave: ElementosClave,
    pub mejores_practicas: Vec<String>,
    pub casos_exito: Vec<CasoExito>,
    pub actualizado: DateTime<Utc>,
}

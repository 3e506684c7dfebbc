//! Knowledge Normalizer — turns a free-text upload submission into the
//! canonical record shape.
//!
//! The normalization is lossy but deterministic: list fields split on
//! newlines, case studies split on blank-line-separated paragraphs, and
//! client/description/result attributes are fixed placeholders by design.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::knowledge::record::{CasoExito, ElementosClave, KnowledgeRecord};

/// Form-encoded fields of `POST /upload`. Absent fields default to empty.
#[derive(Debug, Default, Deserialize)]
pub struct UploadForm {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub objetivos: String,
    #[serde(default)]
    pub experiencia: String,
    #[serde(default)]
    pub interaccion: String,
    #[serde(default)]
    pub viralidad: String,
    #[serde(default)]
    pub practicas: String,
    #[serde(default)]
    pub casos: String,
}

/// Normalizes one upload submission. Fails only when the area key is
/// missing (or contains nothing usable as a storage key).
pub fn normalize(form: &UploadForm, now: DateTime<Utc>) -> Result<KnowledgeRecord, AppError> {
    let area = form.area.trim();
    if slugify(area).is_empty() {
        return Err(AppError::MissingAreaKey);
    }

    Ok(KnowledgeRecord {
        area: area.to_string(),
        descripcion_general: form.descripcion.trim().to_string(),
        objetivos: split_lines(&form.objetivos),
        elementos_clave: ElementosClave {
            experiencia: form.experiencia.trim().to_string(),
            interaccion: form.interaccion.trim().to_string(),
            viralidad: form.viralidad.trim().to_string(),
        },
        mejores_practicas: split_lines(&form.practicas),
        casos_exito: split_paragraphs(&form.casos)
            .into_iter()
            .map(CasoExito::from_paragraph)
            .collect(),
        actualizado: now,
    })
}

/// Newline-separated list: trim each line, drop empties, preserve order.
fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank-line-separated paragraphs: a line that trims to nothing closes the
/// current paragraph. Tolerates CRLF and whitespace-only separator lines.
fn split_paragraphs(raw: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line.trim());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

/// Reduces a caller-supplied free-text area key to a safe storage slug:
/// lowercase alphanumerics with single dashes. Arbitrary keys are allowed
/// (they are not restricted to the four generation areas) but can never
/// escape the storage directory.
pub fn slugify(key: &str) -> String {
    let mut slug = String::with_capacity(key.len());
    let mut last_dash = true; // suppress leading dashes
    for ch in key.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

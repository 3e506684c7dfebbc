//! Knowledge Store — one durable, human-readable JSON document per area key.
//!
//! Writes are wholesale replacements serialized behind a store-wide lock,
//! and land via temp-file-then-rename so a reader never observes a partial
//! document. Reads take no lock.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::Mutex;
use tracing::info;

use crate::errors::AppError;
use crate::knowledge::normalizer::slugify;
use crate::knowledge::record::KnowledgeRecord;

/// Storage partitions under the data directory. Only `brief/` is written by
/// the upload path; the case and guideline archives are provisioned for
/// manual curation.
const BRIEF_PARTITION: &str = "brief";
const CASOS_PARTITION: &str = "casos";
const GUIDELINES_PARTITION: &str = "guidelines";

#[derive(Clone)]
pub struct KnowledgeStore {
    data_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl KnowledgeStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates the partition directories. Called once at startup.
    pub async fn ensure_layout(&self) -> Result<(), AppError> {
        for partition in [BRIEF_PARTITION, CASOS_PARTITION, GUIDELINES_PARTITION] {
            let dir = self.data_dir.join(partition);
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| AppError::KnowledgeWrite(format!("creating {dir:?}: {e}")))?;
        }
        Ok(())
    }

    fn brief_path(&self, slug: &str) -> PathBuf {
        self.data_dir.join(BRIEF_PARTITION).join(format!("{slug}.json"))
    }

    /// Overwrites the record for this area key. Last write wins, no merge.
    pub async fn put(&self, area_key: &str, record: &KnowledgeRecord) -> Result<(), AppError> {
        let slug = slugify(area_key);
        if slug.is_empty() {
            return Err(AppError::MissingAreaKey);
        }

        // serde_json emits raw UTF-8, so Spanish text survives verbatim.
        let mut json = serde_json::to_string_pretty(record)
            .map_err(|e| AppError::Internal(anyhow!("serializing record: {e}")))?;
        json.push('\n');

        let path = self.brief_path(&slug);
        let tmp = path.with_extension("json.tmp");

        // Writes to the same key must not interleave; the failed write leaves
        // the previous document in place.
        let _guard = self.write_lock.lock().await;
        tokio::fs::write(&tmp, json.as_bytes())
            .await
            .map_err(|e| AppError::KnowledgeWrite(format!("writing {tmp:?}: {e}")))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| AppError::KnowledgeWrite(format!("replacing {path:?}: {e}")))?;

        info!("Knowledge record stored for area '{area_key}' ({})", path.display());
        Ok(())
    }

    /// Returns the persisted record for this area key, or `NotFound`.
    pub async fn get(&self, area_key: &str) -> Result<KnowledgeRecord, AppError> {
        let slug = slugify(area_key);
        if slug.is_empty() {
            return Err(AppError::MissingAreaKey);
        }

        let path = self.brief_path(&slug);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::NotFound(format!(
                    "No existe conocimiento para el área '{area_key}'"
                )));
            }
            Err(e) => {
                return Err(AppError::Internal(anyhow!("reading {path:?}: {e}")));
            }
        };

        serde_json::from_str(&raw)
            .map_err(|e| AppError::Internal(anyhow!("parsing {path:?}: {e}")))
    }

    #[cfg(test)]
    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::normalizer::{normalize, UploadForm};

    fn sample_record(area: &str, descripcion: &str) -> KnowledgeRecord {
        let form = UploadForm {
            area: area.into(),
            descripcion: descripcion.into(),
            objetivos: "aumentar recordación\ngenerar prueba de producto".into(),
            experiencia: "inmersiva".into(),
            interaccion: "participativa".into(),
            viralidad: "alta".into(),
            practicas: "medir siempre".into(),
            casos: "Caso uno.\n\nCaso dos.".into(),
        };
        normalize(&form, "2024-05-01T12:00:00Z".parse().unwrap()).unwrap()
    }

    async fn store() -> (tempfile::TempDir, KnowledgeStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KnowledgeStore::new(dir.path());
        store.ensure_layout().await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips_deep_equal() {
        let (_dir, store) = store().await;
        let record = sample_record("btl", "briefs de activaciones");

        store.put("btl", &record).await.unwrap();
        let loaded = store.get("btl").await.unwrap();

        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_second_put_replaces_wholesale() {
        let (_dir, store) = store().await;
        let first = sample_record("btl", "primera versión");
        let mut second = sample_record("btl", "segunda versión");
        second.objetivos = vec!["un único objetivo".to_string()];

        store.put("btl", &first).await.unwrap();
        store.put("btl", &second).await.unwrap();

        let loaded = store.get("btl").await.unwrap();
        assert_eq!(loaded, second);
        assert_eq!(loaded.objetivos, vec!["un único objetivo"]);
    }

    #[tokio::test]
    async fn test_get_unknown_key_is_not_found() {
        let (_dir, store) = store().await;
        assert!(matches!(
            store.get("inexistente").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_free_text_keys_slug_to_brief_partition() {
        let (_dir, store) = store().await;
        let record = sample_record("Campañas BTL / Retail", "texto");

        store.put("Campañas BTL / Retail", &record).await.unwrap();

        let path = store
            .data_dir()
            .join("brief")
            .join("campañas-btl-retail.json");
        assert!(path.exists(), "record must land in the brief partition");
        let loaded = store.get("Campañas BTL / Retail").await.unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_traversal_keys_cannot_escape_the_partition() {
        let (dir, store) = store().await;
        let record = sample_record("x", "texto");

        store.put("../../fuera", &record).await.unwrap();

        let escaped = dir.path().join("fuera.json");
        assert!(!escaped.exists());
        assert!(dir.path().join("brief").join("fuera.json").exists());
    }

    #[tokio::test]
    async fn test_empty_key_is_rejected() {
        let (_dir, store) = store().await;
        let record = sample_record("x", "texto");
        assert!(matches!(
            store.put("  !! ", &record).await,
            Err(AppError::MissingAreaKey)
        ));
    }

    #[tokio::test]
    async fn test_persisted_document_is_human_readable_utf8() {
        let (_dir, store) = store().await;
        let mut record = sample_record("btl", "activación en la vía pública");
        record.elementos_clave.experiencia = "sorpresa y asombro — 100% vivencial".into();

        store.put("btl", &record).await.unwrap();

        let raw =
            std::fs::read_to_string(store.data_dir().join("brief").join("btl.json")).unwrap();
        assert!(raw.contains("activación en la vía pública"));
        assert!(raw.contains("sorpresa y asombro — 100% vivencial"));
        assert!(raw.contains("\n  "), "document must be pretty-printed");
    }
}

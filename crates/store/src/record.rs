use serde::{Deserialize, Serialize};

/// One chunk embedding joined to its parent document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingRecord {
    pub id: i64,
    pub document_id: i64,
    /// Bounded preview of the chunk text.
    pub chunk_text: String,
    pub chunk_index: i32,
    pub vector: Vec<f32>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub document_name: String,
    pub project_id: Option<i64>,
    pub is_vault_document: bool,
}

/// Conjunctive filters applied to a fetch. Absent fields do not filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreFilters {
    pub document_id: Option<i64>,
    pub project_id: Option<i64>,
    /// Only rows whose document is flagged as a vault document.
    pub is_vault_only: bool,
}

impl StoreFilters {
    pub fn is_empty(&self) -> bool {
        self.document_id.is_none() && self.project_id.is_none() && !self.is_vault_only
    }

    /// Whether `record` passes every active filter.
    pub fn matches(&self, record: &EmbeddingRecord) -> bool {
        if let Some(doc) = self.document_id {
            if record.document_id != doc {
                return false;
            }
        }
        if let Some(project) = self.project_id {
            if record.project_id != Some(project) {
                return false;
            }
        }
        !self.is_vault_only || record.is_vault_document
    }
}

/// First `max_chars` characters of `text` (character, not byte, count).
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

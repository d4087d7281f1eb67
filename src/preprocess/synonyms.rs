use std::collections::HashMap;
use std::path::Path;

/// Static keyword -> equivalents mapping, loaded once at process start.
///
/// Keys in the dictionary file use natural (space-separated) surface forms;
/// lookups accept the tokenizer's joined form as well.
#[derive(Debug, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A missing or unreadable dictionary is non-fatal: the table starts
    /// empty and expansion becomes a no-op.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Synonym dictionary not loaded from {:?}: {}", path, err);
                return Self::empty();
            }
        };

        match serde_json::from_str::<HashMap<String, Vec<String>>>(&raw) {
            Ok(entries) => {
                tracing::info!("Loaded {} synonym entries from {:?}", entries.len(), path);
                Self { entries }
            }
            Err(err) => {
                tracing::error!("Synonym dictionary at {:?} is malformed: {}", path, err);
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks the token up in both its joined and space-separated surface
    /// form (the tokenizer emits `du_lịch_bụi`, the dictionary may key
    /// `du lịch bụi`).
    pub fn expand(&self, token: &str) -> Option<&[String]> {
        if let Some(found) = self.entries.get(token) {
            return Some(found);
        }
        let spaced = token.replace('_', " ");
        self.entries.get(&spaced).map(Vec::as_slice)
    }
}

use serde::{Deserialize, Serialize};

/// One token as produced by the tagging annotator.
///
/// `ner` follows the BIO convention: `B-LOC` opens a location mention,
/// `I-LOC` continues one, anything else is outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedToken {
    pub form: String,
    pub pos: String,
    pub ner: String,
}

impl TaggedToken {
    pub fn new(form: &str, pos: &str, ner: &str) -> Self {
        Self {
            form: form.to_string(),
            pos: pos.to_string(),
            ner: ner.to_string(),
        }
    }

    pub fn is_loc_begin(&self) -> bool {
        self.ner == "B-LOC"
    }

    pub fn is_loc(&self) -> bool {
        self.ner == "B-LOC" || self.ner == "I-LOC"
    }

    /// Nouns and adjectives are the keyword-eligible classes.
    /// VnCoreNLP tagset: `N`, `Np`, `Nc`, `Nu` are nominal, `A` adjectival.
    pub fn is_noun_or_adjective(&self) -> bool {
        self.pos.starts_with('N') || self.pos == "A"
    }
}

/// Annotation output is grouped by sentence.
pub type Sentence = Vec<TaggedToken>;

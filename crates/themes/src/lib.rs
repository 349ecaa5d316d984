//! # Cluster themes
//!
//! Names each cluster of a visualization batch after the terms that occur
//! most often in its members' text previews.
//!
//! For every group the previews are concatenated, lowercased and split into
//! alphabetic runs of three or more letters (Spanish accents included).
//! Bilingual stopwords are dropped, the rest are ranked by frequency with ties
//! going to the term seen first, and the top terms are capitalized and joined.
//!
//! When nothing survives the filter the group is named after the document all
//! of its members share, or gets a generic `"Theme {id}"` label.
//!
//! ```
//! use themes::{label_groups, ThemeConfig, ThemeSource};
//!
//! let sources = [
//!     ThemeSource::new("Contrato de arrendamiento del local", "contrato.pdf"),
//!     ThemeSource::new("El contrato vence en marzo", "contrato.pdf"),
//! ];
//! let themes = label_groups(&sources, &[0, 0], &ThemeConfig::default());
//! assert_eq!(themes[&0], "Contrato / Arrendamiento / Local");
//! ```

mod stopwords;
mod tokenize;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub use crate::stopwords::is_stopword;
pub use crate::tokenize::{capitalize, terms};

/// Label formatting knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Terms kept per label.
    pub top_terms: usize,
    pub separator: String,
    /// Longest document-name fallback, in characters.
    pub name_chars: usize,
    /// Prefix of the generic label, followed by a space and the group id.
    pub generic_prefix: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            top_terms: 3,
            separator: " / ".to_string(),
            name_chars: 30,
            generic_prefix: "Theme".to_string(),
        }
    }
}

/// Text a single point contributes to its group's label.
#[derive(Debug, Clone, Copy)]
pub struct ThemeSource<'a> {
    pub text: &'a str,
    pub document_name: &'a str,
}

impl<'a> ThemeSource<'a> {
    pub fn new(text: &'a str, document_name: &'a str) -> Self {
        Self {
            text,
            document_name,
        }
    }
}

/// Label every group that has at least one member.
///
/// `labels[i]` is the group of `sources[i]`; extra entries on either side
/// are ignored.
pub fn label_groups(sources: &[ThemeSource<'_>], labels: &[usize], cfg: &ThemeConfig) -> BTreeMap<usize, String> {
    let mut members: BTreeMap<usize, Vec<&ThemeSource<'_>>> = BTreeMap::new();
    for (source, &group) in sources.iter().zip(labels) {
        members.entry(group).or_default().push(source);
    }

    members
        .into_iter()
        .map(|(group, items)| {
            let theme = theme_for(group, &items, cfg);
            tracing::trace!(group, size = items.len(), %theme, "labeled group");
            (group, theme)
        })
        .collect()
}

fn theme_for(group: usize, items: &[&ThemeSource<'_>], cfg: &ThemeConfig) -> String {
    let text = items.iter().map(|s| s.text).collect::<Vec<_>>().join(" ");
    let top = top_terms(&text, cfg.top_terms);
    if !top.is_empty() {
        return top
            .iter()
            .map(|t| capitalize(t))
            .collect::<Vec<_>>()
            .join(&cfg.separator);
    }

    shared_document(items, cfg.name_chars).unwrap_or_else(|| format!("{} {group}", cfg.generic_prefix))
}

/// Most frequent terms of `text`, ties broken by first occurrence.
fn top_terms(text: &str, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, term) in terms(text).into_iter().enumerate() {
        counts.entry(term).or_insert((0, position)).0 += 1;
    }
    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().take(limit).map(|(term, ..)| term).collect()
}

/// Stem of the one document every member comes from, if there is one.
fn shared_document(items: &[&ThemeSource<'_>], max_chars: usize) -> Option<String> {
    let first = items.first()?.document_name;
    if items.iter().any(|s| s.document_name != first) {
        return None;
    }
    let stem = first.split('.').next().unwrap_or(first);
    let stem: String = stem.chars().take(max_chars).collect();
    (!stem.is_empty()).then_some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ThemeConfig {
        ThemeConfig::default()
    }

    #[test]
    fn ranks_by_frequency_then_first_seen() {
        let sources = [
            ThemeSource::new("beta alpha gamma", "a.pdf"),
            ThemeSource::new("alpha delta beta alpha", "b.pdf"),
        ];
        let themes = label_groups(&sources, &[4, 4], &cfg());
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[&4], "Alpha / Beta / Gamma");
    }

    #[test]
    fn groups_are_labeled_independently() {
        let sources = [
            ThemeSource::new("factura pendiente", "x.pdf"),
            ThemeSource::new("informe trimestral", "y.pdf"),
            ThemeSource::new("factura pagada", "x.pdf"),
        ];
        let themes = label_groups(&sources, &[0, 1, 0], &cfg());
        assert_eq!(themes[&0], "Factura / Pendiente / Pagada");
        assert_eq!(themes[&1], "Informe / Trimestral");
    }

    #[test]
    fn stopword_only_group_falls_back_to_shared_document() {
        let sources = [
            ThemeSource::new("el de la que para", "Informe anual de resultados 2023.final.pdf"),
            ThemeSource::new("the and was", "Informe anual de resultados 2023.final.pdf"),
        ];
        let themes = label_groups(&sources, &[2, 2], &cfg());
        assert_eq!(themes[&2], "Informe anual de resultados 20");
    }

    #[test]
    fn mixed_documents_fall_back_to_generic_label() {
        let sources = [
            ThemeSource::new("para con una", "a.pdf"),
            ThemeSource::new("los las del", "b.pdf"),
        ];
        let themes = label_groups(&sources, &[1, 1], &cfg());
        assert_eq!(themes[&1], "Theme 1");
    }

    #[test]
    fn nameless_document_uses_generic_label() {
        let sources = [ThemeSource::new("", ".hidden")];
        let themes = label_groups(&sources, &[0], &cfg());
        assert_eq!(themes[&0], "Theme 0");
    }

    #[test]
    fn config_is_honored() {
        let sources = [ThemeSource::new("uno dos tres cuatro cinco seis", "a.txt")];
        let custom = ThemeConfig {
            top_terms: 2,
            separator: " | ".into(),
            ..ThemeConfig::default()
        };
        // "uno" and "dos" are stopwords.
        assert_eq!(label_groups(&sources, &[0], &custom)[&0], "Tres | Cuatro");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let parsed: ThemeConfig = serde_json::from_str(r#"{"generic_prefix": "Tema"}"#).unwrap();
        assert_eq!(parsed.generic_prefix, "Tema");
        assert_eq!(parsed.top_terms, 3);
        assert_eq!(parsed.separator, " / ");
    }
}

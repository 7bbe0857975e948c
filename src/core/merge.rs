//! Translation table accumulation and collision policy.
//!
//! Every source parser feeds its entries through [`TableBuilder`]; this is
//! the single place where the duplicate-key policy is decided. The finalized
//! [`TranslationTable`] is read-only and handed to exporters and analyzers.

use std::collections::{BTreeSet, HashMap};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do when two sources write different values to the same
/// (key, language) pair. Either way the collision is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// The newer value replaces the older one (FlutterFlow behavior).
    #[default]
    LastWins,
    /// The first-seen value is kept.
    FirstWins,
}

/// One observed re-write of a (key, language) pair, in merge order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionRecord {
    pub key: String,
    /// None when a whole key was re-declared (map-literal duplicates).
    pub lang: Option<String>,
    /// Identifier of the source that triggered the collision.
    pub source_id: String,
    pub previous: Option<String>,
    pub replaced_by: Option<String>,
}

/// Finalized key -> language -> text table.
#[derive(Debug, Default)]
pub struct TranslationTable {
    entries: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Language map for a key.
    pub fn get(&self, key: &str) -> Option<&HashMap<String, String>> {
        self.entries.get(key)
    }

    /// Translated text for a (key, language) pair.
    pub fn text(&self, key: &str, lang: &str) -> Option<&str> {
        self.entries.get(key)?.get(lang).map(String::as_str)
    }

    /// Keys in sorted order, for deterministic export and reporting.
    pub fn sorted_keys(&self) -> Vec<&String> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashMap<String, String>)> {
        self.entries.iter()
    }
}

/// Finalized output of an extraction run.
#[derive(Debug, Default)]
pub struct MergedResult {
    pub table: TranslationTable,
    /// Sorted union of every language code observed.
    pub languages: Vec<String>,
    pub collisions: Vec<CollisionRecord>,
}

/// Mutable accumulator for one extraction run.
///
/// Writes must be serialized: collision detection depends on a strict
/// ordering of who wrote a (key, language) pair last. The pipeline parses
/// files in parallel and funnels everything through one builder.
#[derive(Debug, Default)]
pub struct TableBuilder {
    policy: CollisionPolicy,
    entries: HashMap<String, HashMap<String, String>>,
    languages: BTreeSet<String>,
    collisions: Vec<CollisionRecord>,
}

impl TableBuilder {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Merges one (key, language, text) triple.
    ///
    /// Idempotent for identical arguments. A differing value for an existing
    /// pair records a collision and applies the configured policy.
    pub fn merge(&mut self, key: &str, lang: &str, text: &str, source_id: &str) {
        self.languages.insert(lang.to_string());
        let entry = self.entries.entry(key.to_string()).or_default();

        match entry.get(lang) {
            Some(existing) if existing == text => {}
            Some(existing) => {
                self.collisions.push(CollisionRecord {
                    key: key.to_string(),
                    lang: Some(lang.to_string()),
                    source_id: source_id.to_string(),
                    previous: Some(existing.clone()),
                    replaced_by: Some(text.to_string()),
                });
                if self.policy == CollisionPolicy::LastWins {
                    entry.insert(lang.to_string(), text.to_string());
                }
            }
            None => {
                entry.insert(lang.to_string(), text.to_string());
            }
        }
    }

    /// Batch ingestion of (key, language, text) triples from one source.
    pub fn merge_all<I>(&mut self, triples: I, source_id: &str)
    where
        I: IntoIterator<Item = (String, String, String)>,
    {
        for (key, lang, text) in triples {
            self.merge(&key, &lang, &text, source_id);
        }
    }

    /// Registers a key without any language mapping.
    ///
    /// Used for accessor keys found in Dart sources and for map-literal
    /// entries with an empty language map. Existing entries are untouched.
    pub fn merge_key(&mut self, key: &str) {
        self.entries.entry(key.to_string()).or_default();
    }

    /// Records a whole-key re-declaration reported by a source parser.
    ///
    /// The map-literal parser resolves these itself (last declaration wins),
    /// so only the observation lands here.
    pub fn record_duplicate(&mut self, key: &str, source_id: &str) {
        self.collisions.push(CollisionRecord {
            key: key.to_string(),
            lang: None,
            source_id: source_id.to_string(),
            previous: None,
            replaced_by: None,
        });
    }

    /// Finalizes the run. The table is immutable from here on.
    pub fn finish(self) -> MergedResult {
        MergedResult {
            table: TranslationTable {
                entries: self.entries,
            },
            languages: self.languages.into_iter().collect(),
            collisions: self.collisions,
        }
    }
}

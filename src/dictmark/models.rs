//! Core data structures for parsed dictionary entries.
//!
//! The types here form the nesting the markup describes:
//! `Entry` → `Definition` (one per part-of-speech block) → `Meaning`
//! (one per gloss line) → `Example`. All sequences preserve source order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A usage example attached to a meaning.
///
/// Produced from a single example line; the translation is empty when the
/// line carried no `|` separator (or nothing after it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Original-language fragment (text before the `|`).
    pub original: String,
    /// Translation (text after the `|`), possibly empty.
    pub translation: String,
}

/// A single gloss/sense with its inline tag annotations and usage examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    /// The gloss text with every inline tag span removed.
    pub gloss: String,
    /// Inline tags declared on this meaning's source line.
    pub tags: TagMap,
    /// Usage examples, in source order.
    pub examples: Vec<Example>,
}

impl Meaning {
    pub(super) fn new(gloss: String, tags: TagMap) -> Self {
        Self {
            gloss,
            tags,
            examples: Vec::new(),
        }
    }
}

/// A part-of-speech block within an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Part-of-speech label, e.g. "名" or "動". Never empty.
    pub pos: String,
    /// Meanings listed under this part of speech, in source order.
    pub meanings: Vec<Meaning>,
}

impl Definition {
    pub(super) fn new(pos: String) -> Self {
        Self {
            pos,
            meanings: Vec::new(),
        }
    }
}

/// The top-level record for one headword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The headword. Never empty.
    pub term: String,
    /// Part-of-speech blocks, in source order. May be empty if no
    /// part-of-speech line followed the headword.
    pub definitions: Vec<Definition>,
}

impl Entry {
    pub(super) fn new(term: String) -> Self {
        Self {
            term,
            definitions: Vec::new(),
        }
    }
}

/// An insertion-ordered mapping from tag key to tag values.
///
/// Key order follows first occurrence on the source line; a key repeated on
/// the same line keeps accumulating values into its existing sequence. A
/// value-less tag like `[古]` registers its key with an empty sequence.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagMap {
    entries: Vec<(String, Vec<String>)>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct tag keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values recorded for `key`, if the key was declared.
    ///
    /// A value-less declaration yields `Some(&[])`, distinct from `None`
    /// for a key that never appeared.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Tag keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, values)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Register `key` (preserving first-occurrence order) and append any
    /// `values` to its sequence.
    pub(super) fn append<I>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            existing.extend(values);
            return;
        }
        self.entries
            .push((key.to_string(), values.into_iter().collect()));
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for TagMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Vec<V>)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, values) in iter {
            map.append(&key.into(), values.into_iter().map(Into::into));
        }
        map
    }
}

impl Serialize for TagMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TagMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TagMapVisitor;

        impl<'de> Visitor<'de> for TagMapVisitor {
            type Value = TagMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of tag keys to value lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = TagMap::new();
                while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
                    map.append(&key, values);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(TagMapVisitor)
    }
}

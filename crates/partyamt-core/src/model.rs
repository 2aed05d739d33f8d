//! Event data model as returned by the Partyamt GraphQL API.
//!
//! Tags are plain values compared by name. The tags attached to an event and
//! the tags in the global catalog come from separate queries, so nothing here
//! relies on identity: a `Tag` built from either source compares equal to any
//! other `Tag` with the same name.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A named event category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "TagRecord", into = "TagRecord")]
pub struct Tag(String);

/// Wire shape of a tag (`{ id, name }`); the id is never used for comparison.
#[derive(Serialize, Deserialize)]
struct TagRecord {
    name: String,
}

impl From<TagRecord> for Tag {
    fn from(record: TagRecord) -> Self {
        Tag(record.name)
    }
}

impl From<Tag> for TagRecord {
    fn from(tag: Tag) -> Self {
        TagRecord { name: tag.0 }
    }
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::new(name)
    }
}

/// Venue of an event. Owned by the event that embeds it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub maps_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
}

/// One party listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Admission price in euros. `None` and zero both mean free entry.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ics_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    pub location: Location,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl Event {
    /// Returns true if any of this event's tags has the given name.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name() == name)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The user's current tag filter.
///
/// Membership is by tag name. Toggling returns a whole new set so callers
/// always hand the complete selection around, never a delta.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeSet<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Returns the selection with `tag` added if absent, removed if present.
    #[must_use]
    pub fn toggled(&self, tag: &Tag) -> TagSet {
        let mut tags = self.tags.clone();
        if !tags.remove(tag) {
            tags.insert(tag.clone());
        }
        TagSet { tags }
    }

    /// Returns true if any of `tags` is selected.
    pub fn intersects(&self, tags: &[Tag]) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag))
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        TagSet {
            tags: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(Tag::new).collect()
    }
}

//! Help topic registration and lookup
//!
//! Every help topic is an immutable static record binding a canonical name
//! and a set of aliases to a one-line summary and an embedded Markdown body.
//! Topic records carry no logic of their own; uniqueness of names and aliases
//! is enforced by [`HelpRegistry`] when the records are gathered.

use std::collections::HashMap;

use crate::error::{Error, Result};

pub mod topics;

/// An immutable help topic descriptor
///
/// Constructed once as a `static` in its topic module and never mutated.
/// The detailed text is embedded at compile time; `text_ref` keeps the
/// relative path of the Markdown source as the topic's identifier.
#[derive(Debug)]
pub struct HelpTopic {
    /// Canonical topic name users type after `cs help`
    pub name: &'static str,

    /// Alternate names that resolve to this topic
    pub aliases: &'static [&'static str],

    /// One-line summary shown in the topic listing
    pub summary: &'static str,

    /// Relative path of the Markdown source for this topic
    pub text_ref: &'static str,

    /// Full Markdown body rendered by `cs help <topic>`
    pub text: &'static str,
}

impl HelpTopic {
    /// Iterate the canonical name followed by every alias
    pub fn all_keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Registry of all help topics, indexed by name and alias
///
/// Lookup is case-insensitive. Construction fails if two topics claim the
/// same name or alias.
#[derive(Debug)]
pub struct HelpRegistry {
    topics: Vec<&'static HelpTopic>,
    index: HashMap<String, usize>,
}

impl HelpRegistry {
    /// Build the registry from the built-in topic set
    pub fn new() -> Result<Self> {
        Self::from_topics(topics::ALL)
    }

    /// Build a registry from an explicit topic list
    pub fn from_topics(topics: &[&'static HelpTopic]) -> Result<Self> {
        let mut registry = Self {
            topics: Vec::with_capacity(topics.len()),
            index: HashMap::new(),
        };
        for topic in topics {
            registry.register(topic)?;
        }
        Ok(registry)
    }

    /// Register a single topic, rejecting name or alias collisions
    fn register(&mut self, topic: &'static HelpTopic) -> Result<()> {
        let slot = self.topics.len();
        for key in topic.all_keys() {
            let key = key.to_lowercase();
            if self.index.contains_key(&key) {
                return Err(Error::DuplicateTopic(key));
            }
            self.index.insert(key, slot);
        }
        self.topics.push(topic);
        Ok(())
    }

    /// Resolve a topic by canonical name or alias
    pub fn lookup(&self, query: &str) -> Result<&'static HelpTopic> {
        self.index
            .get(&query.to_lowercase())
            .map(|&slot| self.topics[slot])
            .ok_or_else(|| Error::TopicNotFound(query.to_string()))
    }

    /// All registered topics, sorted by canonical name
    pub fn topics(&self) -> Vec<&'static HelpTopic> {
        let mut sorted = self.topics.clone();
        sorted.sort_by_key(|t| t.name);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LEFT: HelpTopic = HelpTopic {
        name: "left",
        aliases: &["l", "first"],
        summary: "Left topic",
        text_ref: "left.md",
        text: "left body",
    };

    static RIGHT: HelpTopic = HelpTopic {
        name: "right",
        aliases: &["r"],
        summary: "Right topic",
        text_ref: "right.md",
        text: "right body",
    };

    static CLASHES_WITH_LEFT: HelpTopic = HelpTopic {
        name: "other",
        aliases: &["First"],
        summary: "Alias collides with LEFT",
        text_ref: "other.md",
        text: "other body",
    };

    #[test]
    fn test_lookup_by_name_and_alias() {
        let registry = HelpRegistry::from_topics(&[&LEFT, &RIGHT]).unwrap();
        assert_eq!(registry.lookup("left").unwrap().name, "left");
        assert_eq!(registry.lookup("first").unwrap().name, "left");
        assert_eq!(registry.lookup("r").unwrap().name, "right");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = HelpRegistry::from_topics(&[&LEFT]).unwrap();
        assert_eq!(registry.lookup("LEFT").unwrap().name, "left");
        assert_eq!(registry.lookup("First").unwrap().name, "left");
    }

    #[test]
    fn test_lookup_unknown_topic() {
        let registry = HelpRegistry::from_topics(&[&LEFT]).unwrap();
        let err = registry.lookup("nonesuch").unwrap_err();
        assert!(err.to_string().contains("nonesuch"));
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let result = HelpRegistry::from_topics(&[&LEFT, &CLASHES_WITH_LEFT]);
        assert!(matches!(result, Err(Error::DuplicateTopic(_))));
    }

    #[test]
    fn test_topics_sorted_by_name() {
        let registry = HelpRegistry::from_topics(&[&RIGHT, &LEFT]).unwrap();
        let names: Vec<_> = registry.topics().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["left", "right"]);
    }

    #[test]
    fn test_builtin_registry_builds() {
        let registry = HelpRegistry::new().unwrap();
        assert!(!registry.topics().is_empty());
    }

    #[test]
    fn test_builtin_topics_resolve_by_every_alias() {
        let registry = HelpRegistry::new().unwrap();
        for topic in registry.topics() {
            for key in topic.all_keys() {
                assert_eq!(registry.lookup(key).unwrap().name, topic.name);
            }
        }
    }

    #[test]
    fn test_builtin_topics_have_bodies() {
        let registry = HelpRegistry::new().unwrap();
        for topic in registry.topics() {
            assert!(!topic.summary.is_empty(), "{} has no summary", topic.name);
            assert!(!topic.text.is_empty(), "{} has no body", topic.name);
            assert!(topic.text_ref.ends_with(".md"));
        }
    }
}

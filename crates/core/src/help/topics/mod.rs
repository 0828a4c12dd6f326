//! Built-in help topics
//!
//! Each module holds one static [`HelpTopic`](super::HelpTopic) record with
//! its Markdown body embedded from `detailed_help/`.

mod apis;
mod crc32c;
mod encoding;
mod projects;
mod security;
mod wildcards;

use super::HelpTopic;

/// Every built-in topic, in registration order
pub static ALL: &[&HelpTopic] = &[
    &apis::TOPIC,
    &crc32c::TOPIC,
    &encoding::TOPIC,
    &projects::TOPIC,
    &security::TOPIC,
    &wildcards::TOPIC,
];

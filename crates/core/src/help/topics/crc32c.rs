//! Additional help about CRC32C integrity checking

use crate::help::HelpTopic;

pub static TOPIC: HelpTopic = HelpTopic {
    name: "crc32c",
    aliases: &["crc32", "crc", "checksums"],
    summary: "CRC32C and data integrity checking",
    text_ref: "detailed_help/crc32c.md",
    text: include_str!("../../../detailed_help/crc32c.md"),
};

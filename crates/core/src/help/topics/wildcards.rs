//! Additional help about wildcard names

use crate::help::HelpTopic;

pub static TOPIC: HelpTopic = HelpTopic {
    name: "wildcards",
    aliases: &["wildcard", "*", "**", "?"],
    summary: "Wildcard names",
    text_ref: "detailed_help/wildcards.md",
    text: include_str!("../../../detailed_help/wildcards.md"),
};

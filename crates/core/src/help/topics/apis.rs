//! Additional help about cs's interaction with cloud storage APIs

use crate::help::HelpTopic;

pub static TOPIC: HelpTopic = HelpTopic {
    name: "apis",
    aliases: &["XML", "JSON", "api", "force_api", "prefer_api"],
    summary: "Cloud Storage APIs",
    text_ref: "detailed_help/apis.md",
    text: include_str!("../../../detailed_help/apis.md"),
};

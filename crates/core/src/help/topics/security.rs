//! Additional help about security and privacy

use crate::help::HelpTopic;

pub static TOPIC: HelpTopic = HelpTopic {
    name: "security",
    aliases: &[
        "hmac",
        "https",
        "oauth",
        "protection",
        "privacy",
        "proxies",
        "proxy",
        "signing",
    ],
    summary: "Security and privacy considerations",
    text_ref: "detailed_help/security.md",
    text: include_str!("../../../detailed_help/security.md"),
};

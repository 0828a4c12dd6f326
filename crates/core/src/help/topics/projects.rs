//! Additional help about working with projects

use crate::help::HelpTopic;

pub static TOPIC: HelpTopic = HelpTopic {
    name: "projects",
    aliases: &[
        "cloud console",
        "console",
        "project",
        "proj",
        "project-id",
    ],
    summary: "Working with projects",
    text_ref: "detailed_help/projects.md",
    text: include_str!("../../../detailed_help/projects.md"),
};

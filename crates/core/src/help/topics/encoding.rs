//! Additional help about filename encoding

use crate::help::HelpTopic;

pub static TOPIC: HelpTopic = HelpTopic {
    name: "encoding",
    aliases: &[
        "encodings",
        "utf8",
        "utf-8",
        "latin1",
        "unicode",
        "interoperability",
    ],
    summary: "Filename encoding and interoperability problems",
    text_ref: "detailed_help/encoding.md",
    text: include_str!("../../../detailed_help/encoding.md"),
};

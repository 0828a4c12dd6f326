//! help command - additional help topics
//!
//! With no argument, lists every registered topic with its one-line
//! summary. With a topic name or alias, renders that topic's full text.

use clap::Args;
use comfy_table::Table;
use cs_core::{HelpRegistry, HelpTopic};
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Arguments for the help command
#[derive(Args, Debug)]
pub struct HelpArgs {
    /// Topic name or alias; omit to list all topics
    pub topic: Option<String>,
}

#[derive(Serialize)]
struct TopicSummary<'a> {
    name: &'a str,
    aliases: &'a [&'a str],
    summary: &'a str,
}

#[derive(Serialize)]
struct TopicDetail<'a> {
    name: &'a str,
    aliases: &'a [&'a str],
    summary: &'a str,
    text: &'a str,
}

/// Execute the help command
pub async fn execute(args: HelpArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let registry = match HelpRegistry::new() {
        Ok(registry) => registry,
        Err(e) => {
            formatter.error(&format!("Failed to build help registry: {e}"));
            return ExitCode::from(&e);
        }
    };

    tracing::debug!(topic = ?args.topic, "dispatching help");

    match args.topic {
        None => list_topics(&registry, &formatter),
        Some(query) => match registry.lookup(&query) {
            Ok(topic) => render_topic(topic, &formatter),
            Err(e) => {
                formatter.error(&e.to_string());
                ExitCode::from(&e)
            }
        },
    }
}

fn list_topics(registry: &HelpRegistry, formatter: &Formatter) -> ExitCode {
    let topics = registry.topics();

    if formatter.is_json() {
        let summaries: Vec<TopicSummary<'_>> = topics
            .iter()
            .map(|t| TopicSummary {
                name: t.name,
                aliases: t.aliases,
                summary: t.summary,
            })
            .collect();
        formatter.json(&summaries);
        return ExitCode::Success;
    }

    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::NOTHING)
        .set_header(vec!["TOPIC", "DESCRIPTION"]);
    for topic in &topics {
        table.add_row(vec![topic.name, topic.summary]);
    }

    formatter.text(&table.to_string());
    formatter.text("\nRun `cs help <topic>` for details on a topic.");
    ExitCode::Success
}

fn render_topic(topic: &HelpTopic, formatter: &Formatter) -> ExitCode {
    if formatter.is_json() {
        formatter.json(&TopicDetail {
            name: topic.name,
            aliases: topic.aliases,
            summary: topic.summary,
            text: topic.text,
        });
        return ExitCode::Success;
    }

    let heading = format!("{} - {}", topic.name, topic.summary);
    if formatter.colors_enabled() {
        formatter.text(&console::style(&heading).bold().to_string());
    } else {
        formatter.text(&heading);
    }
    formatter.text("");
    formatter.text(topic.text.trim_end());
    ExitCode::Success
}

//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kindred_domain::{ConditionId, FamilySource, PersonId};
use kindred_engine::{GenerationAnalytics, GeneticMatchResult, Segment, TreeLayout};
use std::collections::BTreeSet;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a match between two people.
    pub fn format_match<F: FamilySource>(
        &self,
        family: &F,
        source: &PersonId,
        target: &PersonId,
        result: &GeneticMatchResult,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "source": source,
                "target": target,
                "result": result,
            }))?),
            OutputFormat::Quiet => Ok(join_ids(&result.path)),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Source".to_string(), describe(family, source)]);
                builder.push_record(["Target".to_string(), describe(family, target)]);
                builder.push_record(["Relationship".to_string(), self.colorize(&result.label, "cyan")]);
                builder.push_record(["Shared DNA".to_string(), self.percentage(result.percentage)]);
                let path = if result.path.is_empty() {
                    "-".to_string()
                } else {
                    result
                        .path
                        .iter()
                        .map(PersonId::as_str)
                        .collect::<Vec<_>>()
                        .join(" → ")
                };
                builder.push_record(["Path".to_string(), path]);
                if let Some(order) = result.birth_order {
                    builder.push_record(["Birth order".to_string(), format!("{:?}", order)]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a blood-relative set.
    pub fn format_relatives<F: FamilySource>(
        &self,
        family: &F,
        person: &PersonId,
        relatives: &BTreeSet<PersonId>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "person": person,
                "relatives": relatives,
            }))?),
            OutputFormat::Quiet => Ok(join_ids(relatives)),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Name"]);
                for id in relatives {
                    let marker = if id == person {
                        format!("{} (self)", id)
                    } else {
                        id.to_string()
                    };
                    builder.push_record([marker, name_of(family, id)]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format the relatives sharing a condition.
    pub fn format_shared<F: FamilySource>(
        &self,
        family: &F,
        condition: &ConditionId,
        matches: &[(PersonId, GeneticMatchResult)],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = matches
                    .iter()
                    .map(|(id, result)| {
                        serde_json::json!({
                            "id": id,
                            "percentage": result.percentage,
                            "label": result.label,
                            "path": result.path,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "condition": condition,
                    "relatives": entries,
                }))?)
            }
            OutputFormat::Quiet => Ok(join_ids(matches.iter().map(|(id, _)| id))),
            OutputFormat::Table => {
                if matches.is_empty() {
                    return Ok(self.colorize(
                        &format!("No blood relatives carry {}.", condition),
                        "yellow",
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Relationship", "Shared DNA"]);
                for (id, result) in matches {
                    builder.push_record([
                        id.to_string(),
                        name_of(family, id),
                        result.label.clone(),
                        self.percentage(result.percentage),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a pedigree layout, optionally with its connector segments.
    pub fn format_layout(&self, layout: &TreeLayout, connectors: Option<&[Segment]>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "layout": layout,
                "connectors": connectors,
            }))?),
            OutputFormat::Quiet => Ok(join_ids(layout.nodes.iter().map(|node| &node.person.id))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Generation", "X", "Y"]);
                for node in &layout.nodes {
                    builder.push_record([
                        node.person.id.to_string(),
                        node.person.name(),
                        format!("{:+}", node.generation),
                        format!("{:.1}", node.x),
                        format!("{:.1}", node.y),
                    ]);
                }

                let mut output = render(builder);
                output.push('\n');
                output.push_str(&self.info(&format!(
                    "Canvas {:.0} x {:.0}, {} connection(s), {} sibship(s)",
                    layout.width,
                    layout.height,
                    layout.connections.len(),
                    layout.sibships.len()
                )));

                if let Some(segments) = connectors {
                    let mut builder = Builder::default();
                    builder.push_record(["x1", "y1", "x2", "y2"]);
                    for segment in segments {
                        builder.push_record([
                            format!("{:.1}", segment.x1),
                            format!("{:.1}", segment.y1),
                            format!("{:.1}", segment.x2),
                            format!("{:.1}", segment.y2),
                        ]);
                    }
                    output.push('\n');
                    output.push_str(&render(builder));
                }
                Ok(output)
            }
        }
    }

    /// Format per-generation analytics.
    pub fn format_analytics<F: FamilySource>(&self, family: &F, analytics: &GenerationAnalytics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analytics)?),
            OutputFormat::Quiet => Ok(analytics
                .rows
                .iter()
                .map(|row| format!("{}\t{}", row.generation, row.member_count))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Generation", "Members", "Oldest", "Youngest"]);
                for row in &analytics.rows {
                    let oldest = row.oldest.as_ref().map(|id| name_of(family, id));
                    let youngest = row.youngest.as_ref().map(|id| name_of(family, id));
                    builder.push_record([
                        format!("{:+}", row.generation),
                        row.member_count.to_string(),
                        oldest.unwrap_or_else(|| "-".to_string()),
                        youngest.unwrap_or_else(|| "-".to_string()),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn percentage(&self, value: f64) -> String {
        let text = format!("{:.1}%", value);
        if value > 0.0 {
            self.colorize(&text, "green")
        } else {
            text
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join_ids<'a>(ids: impl IntoIterator<Item = &'a PersonId>) -> String {
    ids.into_iter().map(PersonId::as_str).collect::<Vec<_>>().join("\n")
}

fn name_of<F: FamilySource>(family: &F, id: &PersonId) -> String {
    family.person(id).map(|p| p.name()).unwrap_or_else(|| "?".to_string())
}

fn describe<F: FamilySource>(family: &F, id: &PersonId) -> String {
    match family.person(id) {
        Some(person) => format!("{} ({})", person.name(), id),
        None => id.to_string(),
    }
}

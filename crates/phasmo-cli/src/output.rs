//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::lore;
use colored::*;
use phasmo_domain::{Clue, DiscountOutcome, FoundOutcome, Investigation, Suspect};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Columns a leading tab occupies when wrapping.
const TAB_WIDTH: usize = 4;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    wrap_width: usize,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, wrap_width: usize) -> Self {
        Self {
            format,
            color_enabled,
            wrap_width,
        }
    }

    /// Format the possible ghosts with the clues each could still leave.
    pub fn format_board(&self, investigation: &Investigation) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(investigation),
            OutputFormat::Table => Ok(self.format_board_table(investigation)),
            OutputFormat::Quiet => Ok(self.format_possible_quiet(investigation)),
        }
    }

    /// Format the remaining, impossible, known and discounted clues.
    pub fn format_clues(&self, investigation: &Investigation) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(investigation),
            OutputFormat::Table => Ok(self.format_clues_text(investigation)),
            OutputFormat::Quiet => Ok(join_lines(&investigation.remaining_clues())),
        }
    }

    /// Format the board followed by the clue summary.
    pub fn format_report(&self, investigation: &Investigation) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(investigation),
            OutputFormat::Table => Ok(format!(
                "{}\n\n{}",
                self.format_board_table(investigation),
                self.format_clues_text(investigation)
            )),
            OutputFormat::Quiet => Ok(self.format_possible_quiet(investigation)),
        }
    }

    /// Format notes for each ghost alongside its clues.
    pub fn format_ghost_notes(&self, ghosts: &BTreeMap<Suspect, BTreeSet<Clue>>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = ghosts
                    .iter()
                    .map(|(ghost, clues)| {
                        json!({
                            "ghost": ghost.as_str(),
                            "clues": names(clues),
                            "notes": lore::ghost_notes(ghost),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => {
                if ghosts.is_empty() {
                    return Ok(self.colorize("No ghost matches the evidence.", "yellow"));
                }

                let divider = "-".repeat(25);
                let sections: Vec<String> = ghosts
                    .iter()
                    .map(|(ghost, clues)| {
                        format!(
                            "{:>12}: {}\n{}\n{}",
                            self.colorize(ghost.as_str(), "cyan"),
                            list_or(clues, "all clues found"),
                            self.wrap(lore::ghost_notes(ghost)),
                            divider
                        )
                    })
                    .collect();
                Ok(sections.join("\n"))
            }
            OutputFormat::Quiet => {
                let ghost_names: BTreeSet<Suspect> = ghosts.keys().cloned().collect();
                Ok(join_lines(&ghost_names))
            }
        }
    }

    /// Format the Ouija board questions.
    pub fn format_questions(&self) -> String {
        self.wrap(&lore::OUIJA_QUESTIONS.join("\n"))
    }

    /// Format the program description.
    pub fn format_about(&self) -> String {
        self.wrap(lore::ABOUT)
    }

    /// Format the result of toggling a clue as found.
    pub fn found_message(&self, clue: &Clue, outcome: FoundOutcome) -> String {
        match outcome {
            FoundOutcome::Added => self.success(&format!("{} added to clues.", clue)),
            FoundOutcome::AddedFromDiscounted => {
                self.success(&format!("{} was discounted, now added to clues.", clue))
            }
            FoundOutcome::Removed => self.info(&format!("{} removed from clues.", clue)),
        }
    }

    /// Format the result of toggling a clue as discounted.
    pub fn discount_message(&self, clue: &Clue, outcome: DiscountOutcome) -> String {
        match outcome {
            DiscountOutcome::Discounted => self.success(&format!("{} discounted.", clue)),
            DiscountOutcome::DiscountedFromFound => {
                self.success(&format!("{} was found, now discounted.", clue))
            }
            DiscountOutcome::Recounted => self.info(&format!("{} is counted again.", clue)),
            DiscountOutcome::AlreadyImpossible => {
                self.warning(&format!("{} is already an impossible clue.", clue))
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

    /// Wrap text to the configured width.
    pub fn wrap(&self, text: &str) -> String {
        wrap_text(text, self.wrap_width)
    }

    fn format_board_table(&self, investigation: &Investigation) -> String {
        let per_ghost = investigation.remaining_clues_per_suspect();
        if per_ghost.is_empty() {
            return self.colorize("No ghost matches the evidence.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Ghost", "Remaining clues", "Status"]);

        for (ghost, remaining) in &per_ghost {
            let status = if remaining.is_empty() {
                self.colorize("confirmed", "green")
            } else {
                "possible".to_string()
            };
            builder.push_record([
                ghost.to_string(),
                list_or(remaining, "-"),
                status,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_clues_text(&self, investigation: &Investigation) -> String {
        let mut lines = Vec::new();

        let remaining = investigation.remaining_clues();
        if !remaining.is_empty() {
            lines.push(format!("Possible remaining clues: {}", list(&remaining)));
        }

        let impossible = investigation.impossible_clues();
        if !impossible.is_empty() {
            lines.push(self.colorize(
                &format!("Impossible clues: {}", list(&impossible)),
                "magenta",
            ));
        }

        if !investigation.found().is_empty() {
            lines.push(self.colorize(
                &format!("Known clues: {}", list(investigation.found())),
                "green",
            ));
        }

        if !investigation.discounted().is_empty() {
            lines.push(self.colorize(
                &format!("Discounted clues: {}", list(investigation.discounted())),
                "yellow",
            ));
        }

        lines.join("\n")
    }

    fn format_possible_quiet(&self, investigation: &Investigation) -> String {
        join_lines(&investigation.possible_suspects())
    }

    fn format_report_json(&self, investigation: &Investigation) -> Result<String> {
        let remaining: serde_json::Map<String, serde_json::Value> = investigation
            .remaining_clues_per_suspect()
            .iter()
            .map(|(ghost, clues)| (ghost.to_string(), json!(names(clues))))
            .collect();

        let mut statuses = serde_json::Map::new();
        for clue in investigation.relation().all_clues() {
            let status = investigation.clue_status(&clue)?;
            statuses.insert(clue.to_string(), json!(status.as_str()));
        }

        let report = json!({
            "found": names(investigation.found()),
            "discounted": names(investigation.discounted()),
            "possible": names(&investigation.possible_suspects()),
            "confirmed": names(&investigation.confirmed_suspects()),
            "remaining": remaining,
            "clues": statuses,
        });

        Ok(serde_json::to_string_pretty(&report)?)
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
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Wrap `text` into tab-indented lines no wider than `width` columns.
///
/// Each input line is wrapped on its own, so explicit line breaks survive.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut used = TAB_WIDTH;

        for word in paragraph.split_whitespace() {
            let len = word.chars().count() + 1;
            if used + len > width && !line.is_empty() {
                lines.push(format!("\t{}", line));
                line.clear();
                used = TAB_WIDTH;
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            used += len;
        }

        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("\t{}", line));
        }
    }

    lines.join("\n")
}

fn names<T: ToString>(set: &BTreeSet<T>) -> Vec<String> {
    set.iter().map(ToString::to_string).collect()
}

fn list<T: ToString>(set: &BTreeSet<T>) -> String {
    names(set).join(", ")
}

fn list_or<T: ToString>(set: &BTreeSet<T>, empty: &str) -> String {
    if set.is_empty() {
        empty.to_string()
    } else {
        list(set)
    }
}

fn join_lines<T: ToString>(set: &BTreeSet<T>) -> String {
    names(set).join("\n")
}

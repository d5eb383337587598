//! Activity command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use reports_github::Event;
use std::collections::HashMap;
use std::fmt::Write;

/// Summarize a user's recent public events
pub struct ActivityCommand {
    pub username: String,
    /// Output the raw event list as JSON
    pub json: bool,
}

/// Count items per key, most frequent first, ties broken by key
pub fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

pub fn events_by_type(events: &[Event]) -> Vec<(String, usize)> {
    count_by(events.iter().map(|event| event.event_type.as_str()))
}

pub fn events_by_repo(events: &[Event]) -> Vec<(String, usize)> {
    count_by(events.iter().map(|event| event.repo_name.as_str()))
}

impl ActivityCommand {
    /// Render the activity report exactly as `execute` prints it
    pub async fn report(&self, context: &CommandContext) -> Result<String> {
        let events = context
            .client
            .public_events_for_user(&self.username)
            .await?;

        if self.json {
            return Ok(serde_json::to_string_pretty(&events)?);
        }

        self.render_summary(&events)
    }

    fn render_summary(&self, events: &[Event]) -> Result<String> {
        let mut out = String::new();

        if events.is_empty() {
            write!(
                out,
                "{} | {}",
                self.username.cyan().bold(),
                "No public events found".yellow()
            )?;
            return Ok(out);
        }

        writeln!(
            out,
            "{} | Fetched {} events",
            self.username.cyan().bold(),
            events.len().to_string().green()
        )?;

        writeln!(out, "\n{}", "By type:".bold())?;
        for (event_type, count) in events_by_type(events) {
            writeln!(out, "{:>6}  {}", count, event_type)?;
        }

        write!(out, "\n{}", "By repository:".bold())?;
        for (repo_name, count) in events_by_repo(events) {
            write!(out, "\n{:>6}  {}", count, repo_name.cyan())?;
        }

        Ok(out)
    }
}

#[async_trait]
impl Command for ActivityCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        println!("{}", self.report(context).await?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: &str, repo_name: &str) -> Event {
        Event {
            event_type: event_type.to_string(),
            repo_name: repo_name.to_string(),
        }
    }

    #[test]
    fn test_events_by_type_orders_by_count_then_name() {
        let events = vec![
            event("WatchEvent", "a/b"),
            event("PushEvent", "a/b"),
            event("PushEvent", "c/d"),
            event("CreateEvent", "c/d"),
        ];

        assert_eq!(
            events_by_type(&events),
            vec![
                ("PushEvent".to_string(), 2),
                ("CreateEvent".to_string(), 1),
                ("WatchEvent".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_events_by_repo() {
        let events = vec![
            event("PushEvent", "c/d"),
            event("PushEvent", "a/b"),
            event("IssuesEvent", "c/d"),
        ];

        assert_eq!(
            events_by_repo(&events),
            vec![("c/d".to_string(), 2), ("a/b".to_string(), 1)]
        );
    }

    #[test]
    fn test_count_by_empty() {
        assert!(count_by(std::iter::empty()).is_empty());
    }
}

use chrono::{Local, NaiveDate};
use dailyverse_core::PoemHistoryEntry;
use dailyverse_orchestrator::PoemOrchestrator;
use dailyverse_store::HistoryStats;

const RECENT_LIMIT: usize = 20;

fn format_entry(entry: &PoemHistoryEntry) -> String {
    let vibe = entry
        .vibe_at_time
        .map(|v| format!(" ({})", v))
        .unwrap_or_default();
    format!(
        "  {} | {} | {}{} | {}",
        entry.viewed_date.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        entry.source,
        entry.poem.title,
        vibe,
        entry.id,
    )
}

fn format_stats(stats: &HistoryStats) -> String {
    if stats.total_entries == 0 {
        return "No poems viewed yet.".to_string();
    }
    let mut out = format!(
        "Total poems: {}\nDays with poems: {}",
        stats.total_entries, stats.total_days
    );
    for (source, count) in &stats.by_source {
        out.push_str(&format!("\n  {}: {}", source, count));
    }
    if !stats.by_vibe.is_empty() {
        out.push_str("\nBy vibe:");
        for (vibe, count) in &stats.by_vibe {
            out.push_str(&format!("\n  {}: {}", vibe, count));
        }
    }
    out
}

fn format_grouped(groups: &[(NaiveDate, Vec<PoemHistoryEntry>)]) -> String {
    groups
        .iter()
        .map(|(day, entries)| {
            let lines: Vec<String> = entries.iter().map(format_entry).collect();
            format!("{}\n{}", day.format("%A, %B %-d, %Y"), lines.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub async fn run(
    orchestrator: &PoemOrchestrator,
    stats: bool,
    grouped: bool,
) -> anyhow::Result<()> {
    if stats {
        println!("{}", format_stats(&orchestrator.history_stats().await));
        return Ok(());
    }

    if grouped {
        let groups = orchestrator.get_history_grouped_by_date().await;
        if groups.is_empty() {
            println!("No poem history");
        } else {
            println!("{}", format_grouped(&groups));
        }
        return Ok(());
    }

    let entries = orchestrator.get_history().await;
    if entries.is_empty() {
        println!("No poem history");
        return Ok(());
    }

    let shown = entries.len().min(RECENT_LIMIT);
    println!("Recent Poems (last {})", shown);
    println!("======================");
    for entry in entries.iter().take(shown) {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

pub async fn streak(orchestrator: &PoemOrchestrator) -> anyhow::Result<()> {
    let info = orchestrator.get_streak_info().await;
    println!("{}", serde_json::to_string(&info)?);
    Ok(())
}

pub async fn forget(orchestrator: &PoemOrchestrator, entry_id: &str) -> anyhow::Result<()> {
    let entry = orchestrator
        .get_history()
        .await
        .into_iter()
        .find(|e| e.id == entry_id);
    let Some(entry) = entry else {
        anyhow::bail!("no history entry with id {}", entry_id);
    };

    if orchestrator.delete_entry(&entry).await {
        println!("Removed '{}' from history", entry.poem.title);
    }
    Ok(())
}

pub async fn clear(orchestrator: &PoemOrchestrator) -> anyhow::Result<()> {
    orchestrator.clear_history().await;
    println!("History cleared");
    Ok(())
}

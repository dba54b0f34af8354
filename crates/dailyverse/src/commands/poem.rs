use dailyverse_core::{Poem, PoemError};
use dailyverse_orchestrator::{PoemOrchestrator, DAILY_PLAN, REFRESH_PLAN};

pub fn render_poem(poem: &Poem) -> String {
    let mut out = String::new();
    out.push_str(&poem.title);
    out.push('\n');
    if let Some(author) = &poem.author {
        out.push_str(&format!("by {}\n", author));
    }
    out.push('\n');
    for line in poem.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    match poem.vibe {
        Some(vibe) => out.push_str(&format!("[{} | {}] {}", poem.source, vibe, poem.id)),
        None => out.push_str(&format!("[{}] {}", poem.source, poem.id)),
    }
    out
}

pub async fn today(orchestrator: &PoemOrchestrator) -> anyhow::Result<()> {
    let resolution = orchestrator.resolve(DAILY_PLAN).await;
    println!("{}", render_poem(&resolution.poem));
    tracing::debug!("served via {}", resolution.stage);
    Ok(())
}

pub async fn refresh(orchestrator: &PoemOrchestrator) -> anyhow::Result<()> {
    let resolution = orchestrator.resolve(REFRESH_PLAN).await;
    println!("{}", render_poem(&resolution.poem));
    tracing::debug!("refreshed via {}", resolution.stage);
    Ok(())
}

pub async fn vibe(orchestrator: &PoemOrchestrator) -> anyhow::Result<()> {
    report(orchestrator.generate_vibe_based_poem().await)
}

pub async fn write(orchestrator: &PoemOrchestrator, prompt: &[String]) -> anyhow::Result<()> {
    report(orchestrator.generate_custom_poem(&prompt.join(" ")).await)
}

fn report(result: Result<Poem, PoemError>) -> anyhow::Result<()> {
    match result {
        Ok(poem) => {
            println!("{}", render_poem(&poem));
            Ok(())
        }
        Err(e) => anyhow::bail!("{}. {}", e, e.recovery_suggestion()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailyverse_core::{PoemSource, Vibe};

    #[test]
    fn test_render_with_author_and_vibe() {
        let poem = Poem::with_id(
            "p1",
            "Fog",
            "The fog comes\non little cat feet.",
            Some("Carl Sandburg".to_string()),
            PoemSource::Remote,
        )
        .with_vibe(Vibe::Peaceful);

        let out = render_poem(&poem);
        assert!(out.starts_with("Fog\nby Carl Sandburg\n"));
        assert!(out.contains("  on little cat feet.\n"));
        assert!(out.ends_with("[remote | peaceful] p1"));
    }

    #[test]
    fn test_render_anonymous() {
        let poem = Poem::with_id("p2", "Untitled", "one line", None, PoemSource::AiGenerated);
        let out = render_poem(&poem);
        assert!(!out.contains("by "));
        assert!(out.ends_with("[ai-generated] p2"));
    }

    #[test]
    fn test_report_error_includes_suggestion() {
        let err = report(Err(PoemError::GenerationUnavailable)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(PoemError::GenerationUnavailable.recovery_suggestion()));
    }
}

use dailyverse_core::{Config, NewsItem, VibeAnalysis};
use dailyverse_mood::{SentimentClassifier, VibeAnalyzer};
use dailyverse_orchestrator::PoemOrchestrator;
use std::path::Path;

pub fn analysis_json(analysis: &VibeAnalysis) -> serde_json::Value {
    let colors = analysis.vibe.colors();
    serde_json::json!({
        "vibe": analysis.vibe.name(),
        "confidence": analysis.confidence(),
        "keywords": analysis.keywords,
        "reasoning": analysis.reasoning,
        "sentiment": {
            "positivity": analysis.sentiment.positivity(),
            "energy": analysis.sentiment.energy(),
            "complexity": analysis.sentiment.complexity(),
        },
        "color_intensity": analysis.color_intensity(),
        "colors": [colors.0, colors.1],
        "prompt": analysis.prompt(),
    })
}

/// Analyze the configured news source
pub async fn run(orchestrator: &PoemOrchestrator) -> anyhow::Result<()> {
    match orchestrator.analyze_current_vibe().await {
        Ok(analysis) => {
            println!("{}", serde_json::to_string_pretty(&analysis_json(&analysis))?);
            Ok(())
        }
        Err(e) => anyhow::bail!("{}. {}", e, e.recovery_suggestion()),
    }
}

/// Analyze a news JSON file directly, without touching the store
pub fn run_file(file: &Path, config: &Config) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(file)?;
    let articles: Vec<NewsItem> = serde_json::from_str(&contents)?;
    let analyzer =
        VibeAnalyzer::with_classifier(SentimentClassifier::with_max_keywords(config.max_keywords));

    let analysis = analyzer.analyze(&articles);
    println!("{}", serde_json::to_string_pretty(&analysis_json(&analysis))?);
    Ok(())
}

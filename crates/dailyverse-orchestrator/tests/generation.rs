mod common;

use common::{Behavior, FakeGenerator, FakeNews, FakeRemote, Harness};
use dailyverse_core::{HistorySource, NewsItem, PoemError, PoemSource, Vibe};

fn harness_with(generator: std::sync::Arc<FakeGenerator>) -> Harness {
    Harness::new(FakeRemote::new(Behavior::Succeed), FakeNews::hopeful(), generator)
}

#[tokio::test]
async fn test_vibe_poem_uses_news_vibe() {
    let harness = harness_with(FakeGenerator::new(true, Behavior::Succeed));
    let orchestrator = harness.orchestrator();

    let poem = orchestrator.generate_vibe_based_poem().await.unwrap();

    assert_eq!(poem.source, PoemSource::AiGenerated);
    assert_eq!(poem.vibe, Some(Vibe::Hopeful));
    let prompt = &harness.generator.prompts()[0];
    assert!(prompt.starts_with(Vibe::Hopeful.prompt_template()));
    assert!(prompt.contains("breakthrough"));
}

#[tokio::test]
async fn test_vibe_poem_replaces_daily_poem() {
    let harness = harness_with(FakeGenerator::new(true, Behavior::Succeed));
    let orchestrator = harness.orchestrator();

    orchestrator.get_daily_poem().await;
    let generated = orchestrator.generate_vibe_based_poem().await.unwrap();
    let daily = orchestrator.get_daily_poem().await;

    assert_eq!(daily.id, generated.id);
    assert_eq!(harness.remote.calls(), 1);
    assert_eq!(harness.notifier.count(), 1);

    let history = orchestrator.get_history().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].source, HistorySource::AiGenerated);
    assert_eq!(history[0].vibe_at_time, Some(Vibe::Hopeful));
}

#[tokio::test]
async fn test_vibe_poem_unavailable() {
    let harness = harness_with(FakeGenerator::unavailable());
    let err = harness
        .orchestrator()
        .generate_vibe_based_poem()
        .await
        .unwrap_err();

    assert_eq!(err, PoemError::GenerationUnavailable);
    assert!(harness.generator.prompts().is_empty());
    assert_eq!(harness.notifier.count(), 0);
}

#[tokio::test]
async fn test_vibe_poem_surfaces_generation_error() {
    let failure = PoemError::GenerationFailed("model crashed".into());
    let harness = harness_with(FakeGenerator::new(true, Behavior::Fail(failure.clone())));
    let orchestrator = harness.orchestrator();

    let err = orchestrator.generate_vibe_based_poem().await.unwrap_err();

    assert_eq!(err, failure);
    assert!(orchestrator.get_history().await.is_empty());
    assert_eq!(harness.notifier.count(), 0);
}

#[tokio::test]
async fn test_vibe_poem_with_quiet_news() {
    let harness = Harness::new(
        FakeRemote::new(Behavior::Succeed),
        FakeNews::with_items(vec![NewsItem::new("Council meets on Tuesday", "")]),
        FakeGenerator::new(true, Behavior::Succeed),
    );
    let poem = harness
        .orchestrator()
        .generate_vibe_based_poem()
        .await
        .unwrap();

    assert_eq!(poem.vibe, Some(Vibe::Contemplative));
}

#[tokio::test]
async fn test_custom_prompt_passed_verbatim() {
    let harness = harness_with(FakeGenerator::new(true, Behavior::Succeed));
    let orchestrator = harness.orchestrator();

    let poem = orchestrator
        .generate_custom_poem("a poem about lighthouses")
        .await
        .unwrap();

    assert_eq!(harness.generator.prompts(), vec!["a poem about lighthouses"]);
    assert_eq!(poem.source, PoemSource::AiGenerated);
    assert_eq!(poem.vibe, None);
    assert_eq!(harness.notifier.count(), 1);

    let history = orchestrator.get_history().await;
    assert_eq!(history[0].source, HistorySource::CustomPrompt);
    assert_eq!(orchestrator.get_daily_poem().await.id, poem.id);
}

#[tokio::test]
async fn test_custom_prompt_is_trimmed() {
    let harness = harness_with(FakeGenerator::new(true, Behavior::Succeed));
    harness
        .orchestrator()
        .generate_custom_poem("  rain on tin roofs \n")
        .await
        .unwrap();

    assert_eq!(harness.generator.prompts(), vec!["rain on tin roofs"]);
}

#[tokio::test]
async fn test_custom_prompt_empty() {
    let harness = harness_with(FakeGenerator::new(true, Behavior::Succeed));
    let err = harness
        .orchestrator()
        .generate_custom_poem("   ")
        .await
        .unwrap_err();

    assert!(err.is_generation_error());
    assert!(harness.generator.prompts().is_empty());
}

#[tokio::test]
async fn test_custom_prompt_unavailable() {
    let harness = harness_with(FakeGenerator::unavailable());
    let err = harness
        .orchestrator()
        .generate_custom_poem("stars")
        .await
        .unwrap_err();
    assert_eq!(err, PoemError::GenerationUnavailable);
}

#[tokio::test]
async fn test_generation_timeout_surfaces() {
    let harness = harness_with(FakeGenerator::new(true, Behavior::Hang));
    let err = harness
        .orchestrator_with(common::fast_timeouts())
        .generate_custom_poem("slow")
        .await
        .unwrap_err();

    assert!(matches!(err, PoemError::GenerationFailed(ref msg) if msg.contains("timed out")));
}

#[tokio::test]
async fn test_analyze_current_vibe() {
    let harness = harness_with(FakeGenerator::unavailable());
    let analysis = harness.orchestrator().analyze_current_vibe().await.unwrap();

    assert_eq!(analysis.vibe, Vibe::Hopeful);
    assert!(analysis.confidence() > 0.5);
    assert!(!analysis.keywords.is_empty());
}

#[tokio::test]
async fn test_analyze_current_vibe_surfaces_fetch_error() {
    let harness = Harness::new(
        FakeRemote::new(Behavior::Succeed),
        FakeNews::failing(PoemError::RateLimited),
        FakeGenerator::unavailable(),
    );
    let err = harness
        .orchestrator()
        .analyze_current_vibe()
        .await
        .unwrap_err();
    assert_eq!(err, PoemError::RateLimited);
}

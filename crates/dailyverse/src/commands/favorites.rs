use dailyverse_core::{Poem, PoemHistoryEntry};
use dailyverse_orchestrator::PoemOrchestrator;

/// Look a poem up by id among favorites first, then history
fn find_poem(favorites: &[Poem], history: &[PoemHistoryEntry], poem_id: &str) -> Option<Poem> {
    favorites
        .iter()
        .find(|p| p.id == poem_id)
        .or_else(|| history.iter().map(|e| &e.poem).find(|p| p.id == poem_id))
        .cloned()
}

pub async fn list(orchestrator: &PoemOrchestrator) -> anyhow::Result<()> {
    let favorites = orchestrator.get_favorites().await;
    if favorites.is_empty() {
        println!("No favorite poems");
        return Ok(());
    }
    for poem in &favorites {
        let author = poem.author.as_deref().unwrap_or("Unknown");
        println!("  {} | {} | {}", poem.title, author, poem.id);
    }
    Ok(())
}

pub async fn toggle(orchestrator: &PoemOrchestrator, poem_id: &str) -> anyhow::Result<()> {
    let favorites = orchestrator.get_favorites().await;
    let history = orchestrator.get_history().await;
    let Some(poem) = find_poem(&favorites, &history, poem_id) else {
        anyhow::bail!("no poem with id {} in favorites or history", poem_id);
    };

    if orchestrator.toggle_favorite(&poem).await {
        println!("Added '{}' to favorites", poem.title);
    } else {
        println!("Removed '{}' from favorites", poem.title);
    }
    Ok(())
}

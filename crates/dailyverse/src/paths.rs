use std::path::PathBuf;

/// Overrides the data directory
pub const HOME_ENV: &str = "DAILYVERSE_HOME";

/// Resolves dailyverse file locations
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// `$DAILYVERSE_HOME`, or `~/.dailyverse`
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self {
                root: PathBuf::from(dir),
            });
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self {
            root: home.join(".dailyverse"),
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn store_file(&self) -> PathBuf {
        self.root.join("store.db")
    }

    /// Offline poem collection
    pub fn poems_file(&self) -> PathBuf {
        self.root.join("poems.json")
    }

    /// Offline news articles
    pub fn news_file(&self) -> PathBuf {
        self.root.join("news.json")
    }
}

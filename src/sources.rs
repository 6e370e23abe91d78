use crate::core::{PantryError, Recipe, RecipeId};
use crate::ui::log_warning;
use git2::Repository;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;
use walkdir::WalkDir;

/// Local recipe corpus: one TOML file per recipe, kept in a git checkout.
pub struct SourceManager {
    local_path: PathBuf,
    remote_url: String,
}

impl SourceManager {
    pub fn new(local_path: PathBuf, remote_url: String) -> Self {
        Self {
            local_path,
            remote_url,
        }
    }

    pub fn sync(&self) -> Result<(), PantryError> {
        if !self.local_path.exists() {
            debug!(url = %self.remote_url, path = %self.local_path.display(), "cloning recipe repository");
            Repository::clone(&self.remote_url, &self.local_path)?;
        } else {
            let status = Command::new("git")
                .current_dir(&self.local_path)
                .arg("pull")
                .status()?;

            if !status.success() {
                log_warning("Failed to update recipes (offline mode?)");
            }
        }
        Ok(())
    }

    /// Reads every recipe file in file-name order, so the corpus order is
    /// stable between runs.
    pub fn load(&self) -> Result<Vec<Recipe>, PantryError> {
        if !self.local_path.exists() {
            debug!(path = %self.local_path.display(), "no local recipe corpus");
            return Ok(Vec::new());
        }

        let mut recipes = Vec::new();
        let mut ids: HashSet<RecipeId> = HashSet::new();

        for entry in WalkDir::new(&self.local_path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git")
            .filter_map(|e| e.ok())
        {
            if entry.path().extension().and_then(|s| s.to_str()) == Some("toml") {
                let content = std::fs::read_to_string(entry.path())?;

                let recipe: Recipe = toml::from_str(&content)?;

                if !ids.insert(recipe.id.clone()) {
                    return Err(PantryError::CorpusError(format!(
                        "Duplicate recipe id '{}' in {}",
                        recipe.id,
                        entry.path().display()
                    )));
                }

                recipes.push(recipe);
            }
        }

        debug!(count = recipes.len(), "loaded recipe corpus");
        Ok(recipes)
    }
}

use crate::config::PantryConfig;
use crate::core::{PantryError, RecipeDetails, RecipeSummary};
use tracing::debug;

const USER_AGENT: &str = concat!("pantry/", env!("CARGO_PKG_VERSION"));

/// Ranking mode of the search endpoint that minimizes missing ingredients.
const RANKING_MINIMIZE_MISSING: &str = "2";

/// Client for the third-party recipe service. One request per call, no
/// retries; callers report failures to the user.
pub struct RecipeApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    result_count: u32,
}

impl RecipeApi {
    pub fn new(base_url: &str, api_key: String, result_count: u32) -> Result<Self, PantryError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            result_count,
        })
    }

    pub fn from_config(config: &PantryConfig) -> Result<Self, PantryError> {
        let api_key = config
            .resolved_api_key()
            .ok_or(PantryError::MissingApiKey)?;
        Self::new(&config.api_base_url, api_key, config.result_count)
    }

    fn search_query(&self, ingredients: &[String]) -> Vec<(&'static str, String)> {
        vec![
            ("apiKey", self.api_key.clone()),
            ("ingredients", ingredients.join(",")),
            ("number", self.result_count.to_string()),
            ("ranking", RANKING_MINIMIZE_MISSING.to_string()),
            ("ignorePantry", "true".to_string()),
        ]
    }

    pub async fn search_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSummary>, PantryError> {
        let url = format!("{}/findByIngredients", self.base_url);
        debug!(%url, count = ingredients.len(), "searching recipes by ingredients");

        let recipes = self
            .client
            .get(&url)
            .query(&self.search_query(ingredients))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<RecipeSummary>>()
            .await?;

        debug!(found = recipes.len(), "search finished");
        Ok(recipes)
    }

    pub async fn recipe_details(&self, id: u64) -> Result<RecipeDetails, PantryError> {
        let url = format!("{}/{}/information", self.base_url, id);
        debug!(%url, "fetching recipe details");

        let details = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<RecipeDetails>()
            .await?;

        Ok(details)
    }
}

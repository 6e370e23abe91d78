use clap::{Parser, Subcommand};
use pantry::api::RecipeApi;
use pantry::config::{pantry_root, ConfigManager};
use pantry::facets::{unique_categories, unique_cuisines, unique_dietary};
use pantry::filter::FilterSelection;
use pantry::matcher::match_recipes;
use pantry::search::SearchEngine;
use pantry::sources::SourceManager;
use pantry::state::{Action, AppState};
use pantry::{PantryError, RecipeSummary};
use pantry::ui::{
    create_spinner, log_error, log_notice, log_success, print_banner, print_cards, print_details,
    print_facet, print_matches,
};
use std::process::exit;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pantry", version, about = "Find recipes for the ingredients you have")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match the local recipe corpus against your ingredients
    Find {
        #[arg(required = true)]
        ingredients: Vec<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Dietary tag the recipe must carry (repeatable, all required)
        #[arg(long = "diet")]
        dietary: Vec<String>,
    },
    /// List cuisines, categories and dietary tags of the local corpus
    Facets,
    /// Suggest ingredient names from the local corpus
    Suggest {
        text: String,
        #[arg(long)]
        selected: Vec<String>,
    },
    /// Search the recipe service by ingredients
    Search { ingredients: Vec<String> },
    /// Show full details of a recipe from the recipe service
    Show { id: u64 },
    /// Sync the local recipe corpus from its git repository
    Update,
    Config {
        #[arg(long)]
        set_repo: Option<String>,
        #[arg(long)]
        set_api_key: Option<String>,
        #[arg(long)]
        set_count: Option<u32>,
        #[arg(long, action)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    print_banner();
    match run(cli).await {
        Ok(Outcome::Done) => {}
        Ok(Outcome::Failed) => exit(1),
        Err(e) => {
            log_error(&e.to_string());
            exit(1);
        }
    }
}

/// Result of a command whose failure was already reported to the user.
#[derive(Debug, PartialEq)]
enum Outcome {
    Done,
    Failed,
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let pantry_root = pantry_root()?;
    if !pantry_root.exists() {
        std::fs::create_dir_all(&pantry_root)?;
    }

    let config_manager = ConfigManager::new(&pantry_root);
    let mut config = config_manager.load().await?;

    let sm = SourceManager::new(pantry_root.join("recipes"), config.repo_url.clone());

    match cli.command {
        Commands::Find {
            ingredients,
            cuisine,
            category,
            dietary,
        } => {
            let corpus = sm.load()?;
            let filters = FilterSelection::new(cuisine, category, dietary);
            let matches = match_recipes(&ingredients, &corpus, Some(&filters));
            info!(
                corpus = corpus.len(),
                matched = matches.len(),
                filters = filters.active_count(),
                "matched local corpus"
            );
            print_matches(&matches, !ingredients.is_empty());
        }
        Commands::Facets => {
            let corpus = sm.load()?;
            print_facet("Cuisines", &unique_cuisines(&corpus));
            print_facet("Categories", &unique_categories(&corpus));
            print_facet("Dietary", &unique_dietary(&corpus));
        }
        Commands::Suggest { text, selected } => {
            let corpus = sm.load()?;
            let known = SearchEngine::known_ingredients(&corpus);
            let suggestions = SearchEngine::suggest(&text, &known, &selected);
            if suggestions.is_empty() {
                println!("No ingredients found matching '{}'", text);
            }
            for name in suggestions {
                println!("{name}");
            }
        }
        Commands::Search { ingredients } => {
            let api = RecipeApi::from_config(&config)?;

            let mut state = AppState::default();
            for name in ingredients {
                state = dispatch(state, Action::AddIngredient(name));
            }
            state = dispatch(state, Action::SearchRequested);

            if state.loading {
                let spinner = create_spinner("Searching recipes...");
                let result = api.search_by_ingredients(&state.selected_ingredients).await;
                spinner.finish_and_clear();

                let (state, outcome) = finish_search(state, result);
                if let Outcome::Failed = outcome {
                    return Ok(outcome);
                }
                print_cards(&state.recipes, !state.selected_ingredients.is_empty());
            } else {
                return Ok(Outcome::Failed);
            }
        }
        Commands::Show { id } => {
            let api = RecipeApi::from_config(&config)?;

            let spinner = create_spinner(&format!("Fetching recipe #{id}..."));
            let result = api.recipe_details(id).await;
            spinner.finish_and_clear();

            let state = match result {
                Ok(details) => dispatch(AppState::default(), Action::DetailsLoaded(details)),
                Err(e) => {
                    warn!(error = %e, id, "recipe details lookup failed");
                    dispatch(AppState::default(), Action::DetailsFailed);
                    return Ok(Outcome::Failed);
                }
            };
            if let Some(details) = &state.selected_recipe {
                print_details(details);
            }
        }
        Commands::Update => {
            println!("Syncing recipes from: {}", config.repo_url);
            sm.sync()?;
            let count = sm.load()?.len();
            log_success(&format!("Recipes updated ({count} available)."));
        }
        Commands::Config {
            set_repo,
            set_api_key,
            set_count,
            show,
        } => {
            let changed = set_repo.is_some() || set_api_key.is_some() || set_count.is_some();
            if let Some(url) = set_repo {
                config.repo_url = url;
            }
            if let Some(key) = set_api_key {
                config.api_key = Some(key);
            }
            if let Some(count) = set_count {
                config.result_count = count;
            }

            if changed {
                config_manager.save(&config).await?;
                log_success("Configuration updated.");
            } else if show {
                println!("Current Configuration:");
                println!("   Repo URL: {}", config.repo_url);
                println!("   API URL: {}", config.api_base_url);
                println!(
                    "   API key: {}",
                    if config.resolved_api_key().is_some() {
                        "set"
                    } else {
                        "not set"
                    }
                );
                println!("   Results per search: {}", config.result_count);
            } else {
                println!("Use --show, --set-repo <URL>, --set-api-key <KEY> or --set-count <N>");
            }
        }
    }

    Ok(Outcome::Done)
}

/// Applies the search response. A failure only produces the generic notice;
/// no result list is shown for it.
fn finish_search(
    state: AppState,
    result: Result<Vec<RecipeSummary>, PantryError>,
) -> (AppState, Outcome) {
    match result {
        Ok(recipes) => (dispatch(state, Action::SearchSucceeded(recipes)), Outcome::Done),
        Err(e) => {
            warn!(error = %e, "recipe search failed");
            (dispatch(state, Action::SearchFailed), Outcome::Failed)
        }
    }
}

fn dispatch(state: AppState, action: Action) -> AppState {
    let (state, notice) = state.reduce(action);
    if let Some(notice) = notice {
        log_notice(&notice);
    }
    state
}

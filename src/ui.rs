use crate::core::{RecipeDetails, RecipeSummary};
use crate::matcher::RecipeMatch;
use crate::sanitize::{plain_field, to_plain_text};
use crate::state::Notice;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

pub fn print_banner() {
    println!();
    println!(
        "   {}  {}",
        "PANTRY".yellow().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("   {}", "Cook with what you have".white());
    println!();
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.yellow} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn log_error(msg: &str) {
    println!("{} {}", "✖ Error:".red().bold(), msg);
}

pub fn log_warning(msg: &str) {
    println!("{} {}", "! Warning:".yellow().bold(), msg);
}

pub fn log_success(msg: &str) {
    println!("{} {}", "✔ Success:".green().bold(), msg);
}

pub fn log_notice(notice: &Notice) {
    match notice {
        Notice::Success(msg) => log_success(msg),
        Notice::Info(msg) => println!("{} {}", "•".cyan().bold(), msg),
        Notice::Error(msg) => log_error(msg),
    }
}

pub fn results_header(count: usize) -> String {
    if count == 0 {
        return "Discover Recipes".to_string();
    }
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} Recipe{plural} Found")
}

pub fn print_empty_state(has_ingredients: bool) {
    if has_ingredients {
        println!("{}", "No matching recipes found".bold());
        println!(
            "We couldn't find any recipes that match your ingredients and filters. \
             Try removing some filters or adding more ingredients."
        );
    } else {
        println!("{}", "What's in your kitchen?".bold());
        println!(
            "Add the ingredients you have, and we'll suggest delicious recipes you can make right now."
        );
    }
    println!();
}

pub fn print_matches(matches: &[RecipeMatch<'_>], has_ingredients: bool) {
    println!("{}", results_header(matches.len()).bold().underline());
    if matches.is_empty() {
        print_empty_state(has_ingredients);
        return;
    }
    for m in matches {
        let recipe = m.recipe;
        let title = if recipe.title.is_empty() {
            &recipe.id.0
        } else {
            &recipe.title
        };
        println!(
            "{} {} ({} · {}) {}",
            format!("{:>3.0}%", m.percentage()).yellow(),
            plain_field(title).green().bold(),
            plain_field(&recipe.cuisine),
            plain_field(&recipe.category),
            format!("[{}]", plain_field(&recipe.id.0)).dimmed()
        );
        if !recipe.dietary.is_empty() {
            let tags: Vec<String> = recipe.dietary.iter().map(|d| plain_field(d)).collect();
            println!("       {}", tags.join(", ").cyan());
        }
    }
    println!();
}

pub fn print_cards(recipes: &[RecipeSummary], has_ingredients: bool) {
    println!("{}", results_header(recipes.len()).bold().underline());
    if recipes.is_empty() {
        print_empty_state(has_ingredients);
        return;
    }
    for recipe in recipes {
        println!(
            "{} {}  {} matched  ♥ {}",
            format!("#{}", recipe.id).dimmed(),
            plain_field(&recipe.title).green().bold(),
            recipe.used_ingredient_count,
            recipe.likes
        );
    }
    println!();
}

pub fn print_details(recipe: &RecipeDetails) {
    println!("{}", plain_field(&recipe.title).green().bold().underline());

    let (cuisines, diets) = detail_tags(recipe);
    let tags: Vec<String> = cuisines
        .iter()
        .map(|c| c.yellow().to_string())
        .chain(diets.iter().map(|d| d.cyan().to_string()))
        .collect();
    if !tags.is_empty() {
        println!("{}", tags.join("  "));
    }

    let minutes = recipe
        .ready_in_minutes
        .map_or_else(|| "?".to_string(), |m| m.to_string());
    let servings = recipe
        .servings
        .map_or_else(|| "?".to_string(), |s| s.to_string());
    println!("⏱ {minutes} min   👥 {servings} servings");

    let summary = to_plain_text(&recipe.summary);
    if !summary.is_empty() {
        println!();
        println!("{summary}");
    }

    println!();
    println!("{}", "Ingredients".bold());
    for line in ingredient_lines(recipe) {
        println!("  • {line}");
    }

    println!();
    println!("{}", "Instructions".bold());
    let instructions = recipe
        .instructions
        .as_deref()
        .map(to_plain_text)
        .unwrap_or_default();
    if instructions.is_empty() {
        println!("  {}", "No instructions provided.".dimmed());
    } else {
        for line in instructions.lines() {
            println!("  {line}");
        }
    }
    println!();
}

/// Cuisine and diet labels of a recipe, safe to print.
fn detail_tags(recipe: &RecipeDetails) -> (Vec<String>, Vec<String>) {
    let clean = |labels: &[String]| {
        labels
            .iter()
            .map(|l| plain_field(l))
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
    };
    (clean(&recipe.cuisines), clean(&recipe.diets))
}

fn ingredient_lines(recipe: &RecipeDetails) -> Vec<String> {
    recipe
        .extended_ingredients
        .iter()
        .map(|ing| plain_field(&ing.original))
        .collect()
}

pub fn print_facet(label: &str, values: &[String]) {
    println!("{}", label.bold());
    if values.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for value in values {
        println!("  {}", plain_field(value));
    }
}

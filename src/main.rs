use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use recipe_affiliate::{
    aggregate_recipes, load_recipes, load_settings, render_ingredients, render_instructions,
    AffiliateError, ProductMatcher, RecipeProcessor, Section,
};

#[derive(Parser)]
#[command(name = "recipe-affiliate", version, about = "Inject affiliate links into recipe ingredients")]
struct Cli {
    /// Settings file (defaults to ./affiliate.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print recipes with affiliate links injected
    Process {
        input: PathBuf,
        /// Also link instruction text
        #[arg(long)]
        instructions: bool,
    },
    /// Print link statistics for a batch of recipes
    Stats { input: PathBuf },
    /// Show which catalog product a piece of text matches
    Match { text: String },
    /// Print ingredients and instructions as uniform sections
    Render { input: PathBuf },
}

#[derive(Serialize)]
struct RenderedRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    ingredients: Vec<Section>,
    instructions: Vec<Section>,
}

fn main() -> Result<(), AffiliateError> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    let processor = RecipeProcessor::new(settings.catalog());
    let mut options = settings.processing_options();
    debug!("Catalog holds {} product(s)", processor.matcher().len());

    match cli.command {
        Command::Process {
            input,
            instructions,
        } => {
            options.include_instructions |= instructions;
            let recipes = load_recipes(&input)?;
            let processed = processor.process_recipes(&recipes, &options);
            info!("Processed {} recipe(s)", processed.len());
            println!("{}", serde_json::to_string_pretty(&processed)?);
        }
        Command::Stats { input } => {
            let recipes = load_recipes(&input)?;
            let processed = processor.process_recipes(&recipes, &options);
            let stats = aggregate_recipes(&processed);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::Match { text } => match processor.matcher().find_product(&text) {
            Some(product) => println!("{}", serde_json::to_string_pretty(product)?),
            None => println!("No match found for {:?}", text),
        },
        Command::Render { input } => {
            let recipes = load_recipes(&input)?;
            let processed = processor.process_recipes(&recipes, &options);
            let rendered: Vec<RenderedRecipe> = processed
                .iter()
                .map(|entry| RenderedRecipe {
                    title: entry.recipe.title.clone(),
                    ingredients: render_ingredients(&entry.recipe.ingredients),
                    instructions: render_instructions(&entry.recipe.instructions),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
    }

    Ok(())
}

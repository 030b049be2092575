mod client;
mod favorites;
mod generate;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Pantry Chef CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from pantry ingredients
    Generate {
        /// Server URL (default: http://localhost:5000)
        #[arg(long, default_value = "http://localhost:5000")]
        server: String,
        /// Save the generated recipe to favorites
        #[arg(long)]
        save: bool,
        /// Ingredients; comma-separated values are split into separate tags
        ingredients: Vec<String>,
    },
    /// Manage saved recipes
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
}

#[derive(Subcommand)]
enum FavoritesCommands {
    /// List saved recipes
    List,
    /// Show a saved recipe
    Show { title: String },
    /// Delete a saved recipe by title
    Delete { title: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            server,
            save,
            ingredients,
        } => {
            generate::generate(&server, save, &ingredients).await?;
        }
        Commands::Favorites { command } => match command {
            FavoritesCommands::List => favorites::list()?,
            FavoritesCommands::Show { title } => favorites::show(&title)?,
            FavoritesCommands::Delete { title } => favorites::delete(&title)?,
        },
    }

    Ok(())
}

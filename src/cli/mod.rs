//! Command-line front end over the collection store.

mod commands;
mod output;

pub use commands::run;
pub use output::{format_price, render_listing, render_status};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::listing::Field;

#[derive(Debug, Parser)]
#[command(name = "motolist", version, about = "Browse and edit motorcycle listings")]
pub struct Cli {
    /// Config file (default: platform config dir, motolist/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the remote base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the collection name
    #[arg(long, global = true, value_name = "NAME")]
    pub resource: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show all listings
    List {
        /// Only listings whose name contains this text
        #[arg(long)]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a listing
    Create(CreateArgs),
    /// Change some fields of a listing
    Update(UpdateArgs),
    /// Remove a listing
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Load listings, then filter them by queries read from stdin
    Browse,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub color: String,
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub image_url: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
}

impl CreateArgs {
    pub fn changes(&self) -> Vec<(Field, String)> {
        vec![
            (Field::Name, self.name.clone()),
            (Field::Color, self.color.clone()),
            (Field::Price, self.price.clone()),
            (Field::Description, self.description.clone()),
            (Field::ImageUrl, self.image_url.clone()),
        ]
    }
}

impl UpdateArgs {
    /// Only the fields given on the command line.
    pub fn changes(&self) -> Vec<(Field, String)> {
        [
            (Field::Name, &self.name),
            (Field::Color, &self.color),
            (Field::Price, &self.price),
            (Field::Description, &self.description),
            (Field::ImageUrl, &self.image_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "media-renamer")]
#[command(author, version, long_about = None)]
#[command(about = "Rename a movie folder and its media files to their canonical TMDB name")]
pub struct Args {
    /// Movie folder to rename, e.g. "Heat (1995)"
    pub folder: PathBuf,

    /// Show the planned changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use the top search result instead of asking when several match
    #[arg(short, long)]
    pub first: bool,

    /// Apply the rename without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Skip the search and use this TMDB movie id
    #[arg(long, value_name = "TMDB_ID")]
    pub id: Option<u64>,
}

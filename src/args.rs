use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(version, about = "Build the apps.json manifest for the launcher page", long_about = None)]
pub struct Args {
    /// Folder containing one subfolder per app [env: APPS_DIR] [default: apps]
    #[arg(long)]
    pub apps_dir: Option<PathBuf>,

    /// Manifest file to write [env: APPS_OUTPUT] [default: public/apps.json]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Prefix for app and thumbnail urls [env: APPS_URL_PREFIX] [default: ../apps]
    #[arg(long)]
    pub url_prefix: Option<String>,

    /// File that marks a folder as an app [env: APPS_ENTRY_FILE] [default: index.html]
    #[arg(long)]
    pub entry_file: Option<String>,

    /// Print the manifest instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

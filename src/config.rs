use std::path::PathBuf;

use crate::args::Args;

pub const DEFAULT_APPS_DIR: &str = "apps";
pub const DEFAULT_OUTPUT: &str = "public/apps.json";
pub const DEFAULT_URL_PREFIX: &str = "../apps";
pub const DEFAULT_ENTRY_FILE: &str = "index.html";

/// Effective settings for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub apps_dir: PathBuf,
    pub output: PathBuf,
    pub url_prefix: String,
    pub entry_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apps_dir: PathBuf::from(DEFAULT_APPS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            entry_file: DEFAULT_ENTRY_FILE.to_string(),
        }
    }
}

impl Config {
    /// Flags win over environment variables, which win over the defaults.
    pub fn resolve(args: &Args) -> Self {
        Self::resolve_with(args, |key| std::env::var(key).ok())
    }

    fn resolve_with(args: &Args, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

        let apps_dir = args
            .apps_dir
            .clone()
            .or_else(|| lookup("APPS_DIR").map(PathBuf::from))
            .unwrap_or(defaults.apps_dir);
        let output = args
            .output
            .clone()
            .or_else(|| lookup("APPS_OUTPUT").map(PathBuf::from))
            .unwrap_or(defaults.output);
        let url_prefix = args
            .url_prefix
            .clone()
            .or_else(|| lookup("APPS_URL_PREFIX"))
            .unwrap_or(defaults.url_prefix);
        let entry_file = args
            .entry_file
            .clone()
            .or_else(|| lookup("APPS_ENTRY_FILE"))
            .unwrap_or(defaults.entry_file);

        Self {
            apps_dir,
            output,
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
            entry_file,
        }
    }

    /// Public url of an app folder, always ending in `/`.
    pub fn app_url(&self, id: &str) -> String {
        format!("{}/{}/", self.url_prefix, id)
    }

    /// Public url of a file inside an app folder.
    pub fn asset_url(&self, id: &str, file: &str) -> String {
        format!("{}/{}/{}", self.url_prefix, id, file)
    }
}

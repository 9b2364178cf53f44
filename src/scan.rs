use futures::future::join_all;
use tokio::fs;

use crate::config::Config;
use crate::data::{AppEntry, Descriptor};
use crate::error::{ProbeError, Result};
use crate::file_ops::{
    ensure_output_dir, first_existing, list_app_folders, path_exists, read_descriptor,
    render_manifest, write_manifest,
};
use crate::reporter::Reporter;
use crate::title::{format_title, placeholder_url, TitleCollator, FALLBACK_DESCRIPTION};

/// Conventional thumbnail names, probed in this order.
pub const THUMBNAIL_CANDIDATES: [&str; 3] = ["thumbnail.png", "thumbnail.jpg", "thumbnail.jpeg"];

/// Inspects one child of the apps folder. `None` means the folder is not an app
/// or could not be read; read failures are reported, not returned.
pub async fn probe_app(config: &Config, reporter: &dyn Reporter, folder: String) -> Option<AppEntry> {
    let app_path = config.apps_dir.join(&folder);

    let metadata = match fs::metadata(&app_path).await {
        Ok(metadata) => metadata,
        Err(source) => {
            reporter.error(&ProbeError::Stat { folder, source }.to_string());
            return None;
        }
    };
    if !metadata.is_dir() {
        reporter.debug(&format!("Skipping {}: not a directory", folder));
        return None;
    }

    match path_exists(&app_path.join(&config.entry_file)).await {
        Ok(true) => {}
        Ok(false) => {
            reporter.debug(&format!("Skipping {}: no {}", folder, config.entry_file));
            return None;
        }
        Err(source) => {
            let err = ProbeError::EntryCheck {
                folder,
                file: config.entry_file.clone(),
                source,
            };
            reporter.error(&err.to_string());
            return None;
        }
    }

    let descriptor = match read_descriptor(&app_path, &folder).await {
        Ok(descriptor) => descriptor.unwrap_or_default(),
        Err(err) => {
            reporter.error(&err.to_string());
            Descriptor::default()
        }
    };

    let title = descriptor
        .title()
        .map(str::to_string)
        .unwrap_or_else(|| format_title(&folder));
    let description = descriptor
        .description()
        .unwrap_or(FALLBACK_DESCRIPTION)
        .to_string();

    let thumbnail = match descriptor.thumbnail() {
        Some(file) => config.asset_url(&folder, file),
        None => match first_existing(&app_path, &THUMBNAIL_CANDIDATES).await {
            Some(file) => config.asset_url(&folder, file),
            None => placeholder_url(&title),
        },
    };

    reporter.info(&format!("- Found app: {}", title));

    Some(AppEntry {
        url: config.app_url(&folder),
        id: folder,
        title,
        description,
        thumbnail,
    })
}

/// Probes every child of the apps folder concurrently and returns the valid
/// apps sorted by title.
pub async fn build_manifest(config: &Config, reporter: &dyn Reporter) -> Result<Vec<AppEntry>> {
    let collator = TitleCollator::new()?;
    let folders = list_app_folders(&config.apps_dir).await?;

    let probes = folders
        .into_iter()
        .map(|folder| probe_app(config, reporter, folder));
    let mut apps: Vec<AppEntry> = join_all(probes).await.into_iter().flatten().collect();

    sort_apps(&mut apps, &collator);
    Ok(apps)
}

/// Title order, with the folder name settling equal titles.
pub fn sort_apps(apps: &mut [AppEntry], collator: &TitleCollator) {
    apps.sort_by(|a, b| {
        collator
            .compare(&a.title, &b.title)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Full build: scan, then overwrite the manifest file.
pub async fn run(config: &Config, reporter: &dyn Reporter) -> Result<Vec<AppEntry>> {
    reporter.info("Scanning for apps...");
    ensure_output_dir(&config.output).await?;

    let apps = build_manifest(config, reporter).await?;
    let bytes = render_manifest(&apps)?;
    write_manifest(&config.output, &bytes).await?;

    reporter.info(&format!(
        "Successfully built {} apps to {}",
        apps.len(),
        config.output.display()
    ));
    Ok(apps)
}

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use crate::data::{AppEntry, Descriptor};
use crate::error::{ManifestError, ProbeError, Result};

pub const DESCRIPTOR_FILE: &str = "info.json";

/// Creates the parent folder of `output` if it is missing.
pub async fn ensure_output_dir(output: &Path) -> Result<()> {
    let Some(dir) = output.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(dir)
        .await
        .map_err(|source| ManifestError::CreateOutputDir {
            path: dir.to_path_buf(),
            source,
        })
}

/// Names of the immediate children of `apps_dir`.
pub async fn list_app_folders(apps_dir: &Path) -> Result<Vec<String>> {
    let read_err = |source: std::io::Error| ManifestError::ReadAppsDir {
        path: apps_dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(apps_dir).await.map_err(read_err)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

pub async fn path_exists(path: &Path) -> std::io::Result<bool> {
    fs::try_exists(path).await
}

/// Reads `info.json` from an app folder. A missing file is `Ok(None)`.
pub async fn read_descriptor(
    app_path: &Path,
    folder: &str,
) -> std::result::Result<Option<Descriptor>, ProbeError> {
    let bytes = match fs::read(app_path.join(DESCRIPTOR_FILE)).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ProbeError::DescriptorRead {
                folder: folder.to_string(),
                source,
            })
        }
    };

    Descriptor::from_slice(&bytes)
        .map(Some)
        .map_err(|source| ProbeError::DescriptorParse {
            folder: folder.to_string(),
            source,
        })
}

/// First of `candidates` that exists inside `dir`. Probe errors count as absent.
pub async fn first_existing<'a>(dir: &Path, candidates: &[&'a str]) -> Option<&'a str> {
    for candidate in candidates {
        if path_exists(&dir.join(candidate)).await.unwrap_or(false) {
            return Some(*candidate);
        }
    }
    None
}

/// Pretty JSON with 2-space indentation and a trailing newline.
pub fn render_manifest(entries: &[AppEntry]) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(entries)?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub async fn write_manifest(output: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(output, bytes)
        .await
        .map_err(|source| ManifestError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn lists_every_child_including_dot_folders() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("alpha")).unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let mut names = list_app_folders(dir.path()).await.unwrap();
        names.sort();
        assert_eq!(
            names,
            vec![".git".to_string(), "alpha".to_string(), "notes.txt".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_apps_dir_is_fatal() {
        let dir = tempdir().unwrap();
        let err = list_app_folders(&dir.path().join("nope")).await.unwrap_err();
        assert!(matches!(err, ManifestError::ReadAppsDir { .. }));
    }

    #[tokio::test]
    async fn missing_descriptor_is_none_and_broken_one_is_an_error() {
        let dir = tempdir().unwrap();
        assert_eq!(read_descriptor(dir.path(), "demo").await.unwrap(), None);

        std::fs::write(dir.path().join(DESCRIPTOR_FILE), "{ not json").unwrap();
        let err = read_descriptor(dir.path(), "demo").await.unwrap_err();
        assert!(matches!(err, ProbeError::DescriptorParse { .. }));

        std::fs::write(dir.path().join(DESCRIPTOR_FILE), "[]").unwrap();
        let err = read_descriptor(dir.path(), "demo").await.unwrap_err();
        assert!(matches!(err, ProbeError::DescriptorParse { .. }));
    }

    #[tokio::test]
    async fn descriptor_with_byte_order_mark_is_read() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(DESCRIPTOR_FILE),
            "\u{FEFF}{\"title\":\"Bom Title\"}",
        )
        .unwrap();

        let descriptor = read_descriptor(dir.path(), "bom").await.unwrap().unwrap();
        assert_eq!(descriptor.title(), Some("Bom Title"));
    }

    #[tokio::test]
    async fn first_existing_respects_candidate_order() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.jpg"), "").unwrap();
        std::fs::write(dir.path().join("c.jpeg"), "").unwrap();

        let found = first_existing(dir.path(), &["a.png", "b.jpg", "c.jpeg"]).await;
        assert_eq!(found, Some("b.jpg"));
        assert_eq!(first_existing(dir.path(), &["a.png"]).await, None);
    }

    #[tokio::test]
    async fn ensure_output_dir_creates_nested_parents() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("public").join("nested").join("apps.json");
        ensure_output_dir(&output).await.unwrap();
        assert!(output.parent().unwrap().is_dir());

        ensure_output_dir(Path::new("apps.json")).await.unwrap();
    }

    #[test]
    fn rendered_manifest_uses_two_space_indent() {
        let entries = vec![AppEntry {
            id: "a".to_string(),
            url: "../apps/a/".to_string(),
            title: "A".to_string(),
            description: "d".to_string(),
            thumbnail: "t".to_string(),
        }];
        let text = String::from_utf8(render_manifest(&entries).unwrap()).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"id\": \"a\",\n    \"url\": \"../apps/a/\",\n    \"title\": \"A\",\n    \"description\": \"d\",\n    \"thumbnail\": \"t\"\n  }\n]\n"
        );
        assert_eq!(render_manifest(&[]).unwrap(), b"[]\n".to_vec());
    }
}

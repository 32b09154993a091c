use std::path::{Path, PathBuf};

use d56_landing::edition::Edition;
use d56_landing::theme::Theme;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::document::{self, PageMeta};
use crate::render;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const NOT_FOUND_FILE: &str = "404.html";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestEntry {
    pub edition: Edition,
    pub theme: Theme,
    pub route: &'static str,
    pub lang: &'static str,
    pub title: &'static str,
    /// Path relative to the output directory, `/`-separated.
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub pages: Vec<ManifestEntry>,
}

/// File an edition is written to, relative to the output directory.
pub fn page_file(edition: Edition) -> String {
    match edition.path().trim_matches('/') {
        "" => "index.html".to_string(),
        dir => format!("{}/index.html", dir),
    }
}

/// Renders both editions and the not-found page into `config.out_dir`.
pub async fn export_site(config: &Config) -> Result<Manifest, ExportError> {
    let origin = config.site_origin.as_deref();
    let mut pages = Vec::new();

    for edition in Edition::ALL {
        let body = render::render_landing(edition).await;
        let meta = PageMeta::for_edition(edition);
        let file = page_file(edition);
        write_file(&config.out_dir, &file, &document::wrap(&meta, &body, origin)).await?;

        pages.push(ManifestEntry {
            edition,
            theme: edition.theme(),
            route: edition.path(),
            lang: meta.lang,
            title: meta.title,
            file,
        });
    }

    let body = render::render_not_found().await;
    let html = document::wrap(&PageMeta::not_found(), &body, origin);
    write_file(&config.out_dir, NOT_FOUND_FILE, &html).await?;

    let manifest = Manifest { pages };
    let json = serde_json::to_string_pretty(&manifest)?;
    write_file(&config.out_dir, MANIFEST_FILE, &json).await?;

    info!(
        out_dir = %config.out_dir.display(),
        pages = manifest.pages.len(),
        "static export finished"
    );
    Ok(manifest)
}

async fn write_file(out_dir: &Path, relative: &str, contents: &str) -> Result<(), ExportError> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(&path, contents)
        .await
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, origin: Option<&str>) -> Config {
        Config {
            out_dir: dir.path().join("site"),
            site_origin: origin.map(str::to_string),
        }
    }

    #[test]
    fn editions_map_to_index_files() {
        assert_eq!(page_file(Edition::German), "index.html");
        assert_eq!(page_file(Edition::English), "en/index.html");
    }

    #[tokio::test]
    async fn writes_pages_and_manifest() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, None);

        let manifest = export_site(&config).await.unwrap();
        assert_eq!(manifest.pages.len(), 2);

        let site = &config.out_dir;
        for file in ["index.html", "en/index.html", "404.html", "manifest.json"] {
            assert!(site.join(file).is_file(), "{} missing", file);
        }

        let german = std::fs::read_to_string(site.join("index.html")).unwrap();
        assert!(german.contains("<html lang=\"de\">"));
        assert!(german.contains("© 2025 d56 Büro für Gestaltung. Alle Rechte vorbehalten."));

        let english = std::fs::read_to_string(site.join("en/index.html")).unwrap();
        assert!(english.contains("<html lang=\"en\">"));
        assert!(english.contains("landing--rounded"));
    }

    #[tokio::test]
    async fn manifest_lists_both_editions() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, Some("https://d56.de"));
        export_site(&config).await.unwrap();

        let raw = std::fs::read_to_string(config.out_dir.join(MANIFEST_FILE)).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let pages = manifest["pages"].as_array().unwrap();

        assert_eq!(pages[0]["route"], "/");
        assert_eq!(pages[0]["lang"], "de");
        assert_eq!(pages[0]["file"], "index.html");
        assert_eq!(pages[0]["theme"], "dashed");
        assert_eq!(pages[1]["route"], "/en");
        assert_eq!(pages[1]["file"], "en/index.html");
        assert_eq!(pages[1]["edition"], "english");
        assert_eq!(pages[1]["theme"], "rounded");

        let english = std::fs::read_to_string(config.out_dir.join("en/index.html")).unwrap();
        assert!(english.contains("href=\"https://d56.de/en\""));
    }

    #[tokio::test]
    async fn unwritable_target_reports_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("site");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = export_site(&config_for(&dir, None)).await.unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. } | ExportError::Write { .. }));
        assert!(err.to_string().contains("site"));
    }
}

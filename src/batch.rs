//! Batch generation for every library in a YAML config.
//!
//! Completed libraries are remembered in a done-ledger (one name per line)
//! so reruns only render what is still missing.

use crate::cover::{CoverReport, CoverSettings, generate_cover};
use crate::error::Result;
use crate::render::StyleRenderer;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_DONE_FILE: &str = "image_done.txt";

#[derive(Debug, Default, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub library: Vec<LibraryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryEntry {
    pub name: String,
    #[serde(default)]
    pub collection_id: Option<String>,
    /// User-supplied cover; libraries with one are never rendered.
    #[serde(default)]
    pub image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<BatchConfig> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml_ng::from_str(&text)?)
}

/// Read the done-ledger. A missing file means nothing is done yet.
pub fn load_done(path: &Path) -> Result<HashSet<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashSet::new()),
        Err(e) => Err(e.into()),
    }
}

pub fn record_done(path: &Path, name: &str) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{name}")?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub done_file: PathBuf,
    /// Regenerate libraries already in the ledger.
    pub force: bool,
}

/// Generate covers for every eligible library, in config order.
///
/// Stops at the first error; libraries finished before it stay recorded.
pub fn run_batch(
    renderer: &dyn StyleRenderer,
    settings: &CoverSettings,
    config: &BatchConfig,
    options: &BatchOptions,
) -> Result<Vec<CoverReport>> {
    let done = load_done(&options.done_file)?;
    let mut reports = Vec::new();

    for lib in &config.library {
        if let Some(ref image) = lib.image {
            log::info!("skipping '{}': uses {}", lib.name, image.display());
            continue;
        }
        if !options.force && done.contains(&lib.name) {
            log::info!("skipping '{}': already done", lib.name);
            continue;
        }

        let report = generate_cover(renderer, settings, &lib.name)?;
        if report.written {
            record_done(&options.done_file, &lib.name)?;
        } else {
            log::warn!("renderer produced nothing for '{}'", lib.name);
        }
        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoverError;
    use crate::render::RenderRequest;
    use std::cell::RefCell;

    const PIXEL_PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    /// Renders every title except those listed in `empty`; fails on `fail`.
    struct ScriptedRenderer {
        empty: Vec<&'static str>,
        fail: Option<&'static str>,
        seen: RefCell<Vec<String>>,
    }

    impl ScriptedRenderer {
        fn new() -> Self {
            Self {
                empty: Vec::new(),
                fail: None,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl StyleRenderer for ScriptedRenderer {
        fn render(&self, request: &RenderRequest) -> Result<Option<String>> {
            let title = request.title.text.as_str();
            self.seen.borrow_mut().push(title.to_string());
            if self.fail.is_some_and(|f| f == title) {
                return Err(CoverError::InvalidPayload("scripted failure".into()));
            }
            if self.empty.iter().any(|e| *e == title) {
                return Ok(None);
            }
            Ok(Some(PIXEL_PNG_B64.to_string()))
        }
    }

    fn config(yaml: &str) -> BatchConfig {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    fn setup() -> (tempfile::TempDir, CoverSettings, BatchOptions) {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = CoverSettings {
            images_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        let options = BatchOptions {
            done_file: tmp.path().join(DEFAULT_DONE_FILE),
            force: false,
        };
        (tmp, settings, options)
    }

    #[test]
    fn test_config_ignores_unknown_keys() {
        let cfg = config(
            "emby_server: http://localhost:8096\nhide: [x]\nlibrary:\n  - name: Movies\n    collection_id: '42'\n  - name: Kids\n    image: covers/kids.png\n",
        );
        assert_eq!(cfg.library.len(), 2);
        assert_eq!(cfg.library[0].collection_id.as_deref(), Some("42"));
        assert_eq!(cfg.library[1].image, Some(PathBuf::from("covers/kids.png")));
    }

    #[test]
    fn test_load_done_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(load_done(&tmp.path().join("none.txt")).unwrap().is_empty());
    }

    #[test]
    fn test_record_then_load_done() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("done.txt");
        record_done(&path, "Movies").unwrap();
        record_done(&path, "TV Shows").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Movies\nTV Shows\n");
        let done = load_done(&path).unwrap();
        assert!(done.contains("Movies") && done.contains("TV Shows"));
    }

    #[test]
    fn test_batch_skips_user_images_and_done() {
        let (_tmp, settings, options) = setup();
        record_done(&options.done_file, "Movies").unwrap();
        let cfg = config(
            "library:\n  - name: Movies\n  - name: Kids\n    image: kids.png\n  - name: Music\n",
        );
        let renderer = ScriptedRenderer::new();

        let reports = run_batch(&renderer, &settings, &cfg, &options).unwrap();

        assert_eq!(*renderer.seen.borrow(), vec!["Music".to_string()]);
        assert_eq!(reports.len(), 1);
        assert!(settings.output_path("Music").exists());
        assert!(load_done(&options.done_file).unwrap().contains("Music"));
    }

    #[test]
    fn test_batch_force_regenerates() {
        let (_tmp, settings, mut options) = setup();
        record_done(&options.done_file, "Movies").unwrap();
        options.force = true;
        let renderer = ScriptedRenderer::new();

        run_batch(&renderer, &settings, &config("library:\n  - name: Movies\n"), &options).unwrap();

        assert_eq!(*renderer.seen.borrow(), vec!["Movies".to_string()]);
    }

    #[test]
    fn test_batch_empty_render_not_recorded() {
        let (_tmp, settings, options) = setup();
        let mut renderer = ScriptedRenderer::new();
        renderer.empty.push("Movies");

        let reports =
            run_batch(&renderer, &settings, &config("library:\n  - name: Movies\n"), &options).unwrap();

        assert!(!reports[0].written);
        assert!(load_done(&options.done_file).unwrap().is_empty());
    }

    #[test]
    fn test_batch_stops_at_first_error() {
        let (_tmp, settings, options) = setup();
        let mut renderer = ScriptedRenderer::new();
        renderer.fail = Some("Music");
        let cfg = config("library:\n  - name: Movies\n  - name: Music\n  - name: Anime\n");

        assert!(run_batch(&renderer, &settings, &cfg, &options).is_err());

        assert_eq!(renderer.seen.borrow().len(), 2);
        let done = load_done(&options.done_file).unwrap();
        assert!(done.contains("Movies"));
        assert!(!done.contains("Anime"));
    }
}

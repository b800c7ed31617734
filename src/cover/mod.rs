pub mod decode;
pub mod resize;

use crate::error::Result;
use crate::render::{FontPair, RenderRequest, StyleRenderer, Title};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Settings shared by every cover generated in one run.
#[derive(Debug, Clone)]
pub struct CoverSettings {
    pub images_dir: PathBuf,
    pub fonts: FontPair,
    pub subtitle: Option<String>,
    /// Resize the rendered cover to [`resize::COVER_WIDTH`]x[`resize::COVER_HEIGHT`].
    pub resize: bool,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            fonts: FontPair::default(),
            subtitle: None,
            resize: true,
        }
    }
}

impl CoverSettings {
    /// `<images_dir>/<name>`: the prefix handed to the renderer.
    ///
    /// The name is appended as-is, never joined as a path, so an absolute or
    /// `..` name stays under the images dir textually.
    pub fn output_prefix(&self, name: &str) -> PathBuf {
        let mut prefix = OsString::from(self.images_dir.as_os_str());
        prefix.push("/");
        prefix.push(name);
        PathBuf::from(prefix)
    }

    /// `<images_dir>/<name>.png`
    pub fn output_path(&self, name: &str) -> PathBuf {
        let mut path = self.output_prefix(name).into_os_string();
        path.push(".png");
        PathBuf::from(path)
    }
}

/// Outcome of one cover generation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CoverReport {
    pub library: String,
    pub path: PathBuf,
    /// False when the renderer produced nothing and no file was touched.
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Render, decode, write and (optionally) resize the cover for `name`.
///
/// An empty render is not an error: the report comes back with
/// `written: false` and the output path is left untouched.
pub fn generate_cover(
    renderer: &dyn StyleRenderer,
    settings: &CoverSettings,
    name: &str,
) -> Result<CoverReport> {
    let path = settings.output_path(name);
    let request = RenderRequest {
        output_prefix: settings.output_prefix(name),
        title: Title {
            text: name.to_string(),
            subtitle: settings.subtitle.clone(),
        },
        fonts: settings.fonts.clone(),
    };

    let Some(payload) = renderer.render(&request)? else {
        return Ok(CoverReport {
            library: name.to_string(),
            path,
            written: false,
            width: None,
            height: None,
        });
    };

    let bytes = decode::decode_payload(&payload)?;
    decode::write_cover(&path, &bytes)?;

    let (width, height) = if settings.resize {
        resize::resize_in_place(&path, resize::COVER_WIDTH, resize::COVER_HEIGHT)?;
        (Some(resize::COVER_WIDTH), Some(resize::COVER_HEIGHT))
    } else {
        match image::image_dimensions(&path) {
            Ok((w, h)) => (Some(w), Some(h)),
            Err(_) => (None, None),
        }
    };

    Ok(CoverReport {
        library: name.to_string(),
        path,
        written: true,
        width,
        height,
    })
}

/// Format the confirmation line printed after a cover is saved.
pub fn save_message(path: &Path) -> String {
    format!("save to {}", path.display())
}

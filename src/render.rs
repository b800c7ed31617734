//! Style renderer seam.
//!
//! Cover composition (layout, typography, poster tiling) is owned by an
//! external renderer. This module describes what a renderer is asked for and
//! ships [`CommandRenderer`], which reaches the renderer through a child
//! process that prints a base64 image on stdout.

use crate::error::{CoverError, Result};
use std::path::PathBuf;
use std::process::Command;

pub const DEFAULT_ZH_FONT: &str = "justzerock-mp-plugin/fonts/multi_1_zh.ttf";
pub const DEFAULT_EN_FONT: &str = "justzerock-mp-plugin/fonts/multi_1_en.ttf";

/// Python bridge run by the default renderer command. Receives
/// `prefix title zh_font en_font [subtitle]` and writes the base64 result,
/// if any, to stdout.
const PYTHON_BRIDGE: &str = r#"import sys
from mediacovergenerator.style_multi_1 import create_style_multi_1
prefix, title, zh_font, en_font = sys.argv[1:5]
subtitle = sys.argv[5] if len(sys.argv) > 5 else None
res = create_style_multi_1(prefix, (title, subtitle), (zh_font, en_font))
if res:
    sys.stdout.write(res.decode() if isinstance(res, bytes) else res)
"#;

/// Chinese and Latin glyph fonts handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPair {
    pub zh: PathBuf,
    pub en: PathBuf,
}

impl Default for FontPair {
    fn default() -> Self {
        Self {
            zh: PathBuf::from(DEFAULT_ZH_FONT),
            en: PathBuf::from(DEFAULT_EN_FONT),
        }
    }
}

/// Cover title. `subtitle: None` tells the renderer to draw no subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub text: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Base path the renderer works from, e.g. `images/<name>`.
    pub output_prefix: PathBuf,
    pub title: Title,
    pub fonts: FontPair,
}

pub trait StyleRenderer {
    /// Render a cover. `Ok(None)` means the renderer produced nothing.
    fn render(&self, request: &RenderRequest) -> Result<Option<String>>;
}

/// Runs an external program as the style renderer.
///
/// The program is invoked as `<program> <args..> <prefix> <title> <zh_font>
/// <en_font> [<subtitle>]` in the current directory. Its stdout is the
/// base64 payload; empty stdout means no result.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for CommandRenderer {
    fn default() -> Self {
        Self {
            program: "uv".to_string(),
            args: vec![
                "run".to_string(),
                "python".to_string(),
                "-c".to_string(),
                PYTHON_BRIDGE.to_string(),
            ],
        }
    }
}

impl CommandRenderer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn command(&self, request: &RenderRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(&request.output_prefix)
            .arg(&request.title.text)
            .arg(&request.fonts.zh)
            .arg(&request.fonts.en);
        if let Some(ref subtitle) = request.title.subtitle {
            cmd.arg(subtitle);
        }
        cmd
    }
}

impl StyleRenderer for CommandRenderer {
    fn render(&self, request: &RenderRequest) -> Result<Option<String>> {
        log::debug!(
            "running renderer '{}' for '{}' (prefix {})",
            self.program,
            request.title.text,
            request.output_prefix.display()
        );

        let output = self
            .command(request)
            .output()
            .map_err(|source| CoverError::RendererStart {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CoverError::RendererFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !output.stderr.is_empty() {
            log::debug!(
                "renderer stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let payload = String::from_utf8(output.stdout)
            .map_err(|e| CoverError::InvalidPayload(format!("renderer output is not UTF-8: {e}")))?;

        if payload.trim().is_empty() {
            log::debug!("renderer returned no data for '{}'", request.title.text);
            return Ok(None);
        }
        Ok(Some(payload))
    }
}

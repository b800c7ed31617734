pub mod output;

use clap::Parser;
use covergen::batch::DEFAULT_DONE_FILE;
use covergen::cover::DEFAULT_IMAGES_DIR;
use covergen::render::{DEFAULT_EN_FONT, DEFAULT_ZH_FONT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "covergen", version, about = "Generate cover images for media libraries")]
pub struct Cli {
    /// Library name: cover title and output file stem
    #[arg(required_unless_present = "config")]
    pub library_name: Option<String>,

    /// Directory covers are written to
    #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,

    /// Font used for Chinese glyphs
    #[arg(long, default_value = DEFAULT_ZH_FONT)]
    pub zh_font: PathBuf,

    /// Font used for Latin glyphs
    #[arg(long, default_value = DEFAULT_EN_FONT)]
    pub en_font: PathBuf,

    /// Subtitle drawn under the title
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Keep the renderer's output size instead of resizing to 426x240
    #[arg(long)]
    pub no_resize: bool,

    /// Renderer program (replaces the default uv/python bridge)
    #[arg(long, env = "COVERGEN_RENDERER")]
    pub renderer: Option<String>,

    /// Argument passed to --renderer ahead of the request arguments (repeatable)
    #[arg(long = "renderer-arg", allow_hyphen_values = true)]
    pub renderer_args: Vec<String>,

    /// Generate covers for every library in a YAML config
    #[arg(long, conflicts_with = "library_name")]
    pub config: Option<PathBuf>,

    /// Ledger of libraries already generated in batch mode
    #[arg(long, default_value = DEFAULT_DONE_FILE)]
    pub done_file: PathBuf,

    /// Regenerate libraries listed in the done ledger
    #[arg(long)]
    pub force: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

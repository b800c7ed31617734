use assert_cmd::Command;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub fn covergen() -> Command {
    let mut cmd = Command::cargo_bin("covergen").unwrap();
    cmd.env_remove("COVERGEN_RENDERER").env_remove("RUST_LOG");
    cmd
}

/// Encode a solid-color PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([120, 80, 200]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode png");
    buf.into_inner()
}

/// Workspace with an `images/` dir and a base64 payload file the fake
/// renderer prints. Returns (TempDir, payload_path). TempDir must be kept alive.
pub fn workspace(payload: &str) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::TempDir::new().expect("create temp dir");
    std::fs::create_dir(tmp.path().join("images")).expect("create images dir");
    let payload_path = tmp.path().join("payload.b64");
    std::fs::write(&payload_path, payload).expect("write payload");
    (tmp, payload_path)
}

pub fn png_payload(width: u32, height: u32) -> String {
    STANDARD.encode(png_bytes(width, height))
}

/// Renderer flags running `sh -c <script>`.
#[allow(dead_code)]
pub fn sh_renderer(script: &str) -> Vec<String> {
    vec![
        "--renderer".to_string(),
        "sh".to_string(),
        "--renderer-arg=-c".to_string(),
        format!("--renderer-arg={script}"),
    ]
}

/// Renderer flags that print the payload file.
pub fn cat_renderer(payload: &Path) -> Vec<String> {
    sh_renderer(&format!("cat '{}'", payload.display()))
}

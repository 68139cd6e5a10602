use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn framefix_cmd() -> Command {
    let mut cmd = Command::cargo_bin("framefix").expect("Failed to find framefix binary");
    // Color must follow the piped stdout, not the caller's environment.
    cmd.env_remove("FORCE_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("IGNORE_IS_TERMINAL");
    cmd
}

fn write_image(path: &Path, width: u32, height: u32, px: [u8; 3]) -> Result<(), Box<dyn Error>> {
    RgbImage::from_pixel(width, height, Rgb(px)).save(path)?;
    Ok(())
}

/// Writes an executable script that prints `stdout` and exits with `code`.
#[cfg(unix)]
fn fake_tool(dir: &Path, name: &str, stdout: &str, code: i32) -> Result<PathBuf, Box<dyn Error>> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\ncat <<'JSON'\n{stdout}\nJSON\nexit {code}\n"))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

#[cfg(unix)]
const FFPROBE_JSON: &str =
    r#"{"streams": [{"index": 0, "codec_type": "video", "display_aspect_ratio": "16:9"}]}"#;

#[cfg(unix)]
const MEDIAINFO_JSON: &str = r#"{"media": {"track": [{"@type": "General"}, {"@type": "Video", "DisplayAspectRatio": "2.390"}]}}"#;

#[test]
fn test_classify_black_frame_is_monochrome() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let image = dir.path().join("black.png");
    write_image(&image, 32, 18, [0, 0, 0])?;

    framefix_cmd()
        .arg("classify")
        .arg("--image")
        .arg(&image)
        .assert()
        .success()
        .stdout(contains("0.00"))
        .stdout(contains("monochrome"));

    Ok(())
}

#[test]
fn test_classify_respects_threshold_override() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let image = dir.path().join("muted.png");
    // Saturation of (100, 90, 80) is 51.
    write_image(&image, 8, 8, [100, 90, 80])?;

    framefix_cmd()
        .args(["classify", "--threshold", "60", "--image"])
        .arg(&image)
        .assert()
        .success()
        .stdout(contains("monochrome"));

    framefix_cmd()
        .args(["classify", "--threshold", "25", "--image"])
        .arg(&image)
        .assert()
        .success()
        .stdout(contains("color"))
        .stdout(contains("monochrome").not());

    Ok(())
}

#[test]
fn test_classify_threshold_from_env() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let image = dir.path().join("muted.png");
    write_image(&image, 8, 8, [100, 90, 80])?;

    framefix_cmd()
        .env("FRAMEFIX_MONOCHROME_THRESHOLD", "60")
        .arg("classify")
        .arg("--image")
        .arg(&image)
        .assert()
        .success()
        .stdout(contains("monochrome"));

    Ok(())
}

#[test]
fn test_classify_rejects_out_of_range_threshold() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let image = dir.path().join("black.png");
    write_image(&image, 4, 4, [0, 0, 0])?;

    framefix_cmd()
        .args(["classify", "--threshold", "400", "--image"])
        .arg(&image)
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));

    Ok(())
}

#[test]
fn test_fix_non_existent_video() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let frame = dir.path().join("frame.png");
    write_image(&frame, 4, 4, [0, 0, 0])?;

    framefix_cmd()
        .arg("fix")
        .args(["--video", "surely/this/does/not/exist/movie.mkv"])
        .arg("--frame")
        .arg(&frame)
        .arg("--output")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(contains("Invalid video path"));

    Ok(())
}

#[test]
fn test_fix_non_existent_frame() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let video = dir.path().join("movie.mkv");
    std::fs::write(&video, "dummy content")?;

    framefix_cmd()
        .arg("fix")
        .arg("--video")
        .arg(&video)
        .args(["--frame", "missing-frame.png"])
        .arg("--output")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(contains("Invalid frame path"));

    Ok(())
}

#[test]
fn test_probe_requires_video() {
    framefix_cmd()
        .arg("probe")
        .assert()
        .failure()
        .stderr(contains("--video"));
}

#[test]
fn test_probe_timeout_must_be_positive() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let video = dir.path().join("movie.mkv");
    std::fs::write(&video, "dummy content")?;

    framefix_cmd()
        .arg("probe")
        .arg("--video")
        .arg(&video)
        .args(["--probe-timeout", "0"])
        .assert()
        .failure();

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_fix_writes_corrected_frame() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let ffprobe = fake_tool(dir.path(), "ffprobe", FFPROBE_JSON, 0)?;
    let mediainfo = fake_tool(dir.path(), "mediainfo", MEDIAINFO_JSON, 0)?;
    let video = dir.path().join("movie.mkv");
    std::fs::write(&video, "dummy content")?;
    let frame = dir.path().join("frame.png");
    // Anamorphic 4:3 storage of a 16:9 picture.
    write_image(&frame, 144, 108, [200, 100, 100])?;
    let output = dir.path().join("out").join("fixed.png");

    framefix_cmd()
        .env("FRAMEFIX_FFPROBE_BIN", &ffprobe)
        .env("FRAMEFIX_MEDIAINFO_BIN", &mediainfo)
        .arg("fix")
        .arg("--video")
        .arg(&video)
        .arg("--frame")
        .arg(&frame)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Dimensions: 192x108"))
        .stdout(contains("Needs palette: yes"));

    let written = image::open(&output)?;
    assert_eq!((written.width(), written.height()), (192, 108));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_fix_without_palette_check_omits_verdict() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let ffprobe = fake_tool(dir.path(), "ffprobe", FFPROBE_JSON, 0)?;
    let video = dir.path().join("movie.mkv");
    std::fs::write(&video, "dummy content")?;
    let frame = dir.path().join("frame.png");
    write_image(&frame, 16, 9, [0, 0, 0])?;

    framefix_cmd()
        .arg("fix")
        .arg("--ffprobe-bin")
        .arg(&ffprobe)
        .arg("--video")
        .arg(&video)
        .arg("--frame")
        .arg(&frame)
        .arg("--output")
        .arg(dir.path().join("fixed.png"))
        .arg("--no-palette-check")
        .assert()
        .success()
        .stdout(contains("Needs palette").not());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_probe_reports_ffprobe_ratio() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let ffprobe = fake_tool(dir.path(), "ffprobe", FFPROBE_JSON, 0)?;
    let mediainfo = fake_tool(dir.path(), "mediainfo", MEDIAINFO_JSON, 0)?;
    let video = dir.path().join("movie.mkv");
    std::fs::write(&video, "dummy content")?;

    framefix_cmd()
        .env("FRAMEFIX_FFPROBE_BIN", &ffprobe)
        .env("FRAMEFIX_MEDIAINFO_BIN", &mediainfo)
        .arg("probe")
        .arg("--video")
        .arg(&video)
        .assert()
        .success()
        .stdout(contains("Display aspect ratio: 1.778"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_probe_falls_back_to_mediainfo() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let ffprobe = fake_tool(dir.path(), "ffprobe", "", 1)?;
    let mediainfo = fake_tool(dir.path(), "mediainfo", MEDIAINFO_JSON, 0)?;
    let video = dir.path().join("movie.mkv");
    std::fs::write(&video, "dummy content")?;

    framefix_cmd()
        .env("FRAMEFIX_FFPROBE_BIN", &ffprobe)
        .env("FRAMEFIX_MEDIAINFO_BIN", &mediainfo)
        .arg("probe")
        .arg("--video")
        .arg(&video)
        .assert()
        .success()
        .stdout(contains("Display aspect ratio: 2.390"));

    Ok(())
}

#[test]
fn test_piped_output_has_no_color_codes() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let image = dir.path().join("black.png");
    write_image(&image, 4, 4, [0, 0, 0])?;

    framefix_cmd()
        .arg("classify")
        .arg("--image")
        .arg(&image)
        .assert()
        .success()
        .stdout(contains("\x1b[").not());

    Ok(())
}

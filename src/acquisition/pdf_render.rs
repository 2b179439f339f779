// PDF page rendering for the OCR fallback, via pdftoppm
//
// Pages are rasterized at 144 dpi (2x the 72 dpi PDF default) into a
// scratch directory that is dropped as soon as the images are loaded.
use std::path::PathBuf;
use std::process::Command;

use image::DynamicImage;
use tempfile::TempDir;

use crate::config::OCR_RENDER_DPI;
use crate::types::AcquireError;

/// Render the first `max_pages` pages to images.
pub fn render_pages(pdf_bytes: &[u8], max_pages: usize) -> Result<Vec<DynamicImage>, AcquireError> {
    let temp_dir = TempDir::new()?;
    let pdf_path = temp_dir.path().join("input.pdf");
    std::fs::write(&pdf_path, pdf_bytes)?;
    let output_prefix = temp_dir.path().join("page");

    let output = Command::new("pdftoppm")
        .arg("-png")
        .arg("-r")
        .arg(OCR_RENDER_DPI.to_string())
        .arg("-f")
        .arg("1")
        .arg("-l")
        .arg(max_pages.to_string())
        .arg(&pdf_path)
        .arg(&output_prefix)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AcquireError::Render(format!("pdftoppm failed: {stderr}")));
    }

    // pdftoppm names output page-<n>.png with zero padding that depends on
    // the page count, so sort numerically rather than lexically.
    let mut pages: Vec<(usize, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(temp_dir.path())? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("png") {
            continue;
        }
        let number = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.strip_prefix("page-"))
            .and_then(|s| s.parse::<usize>().ok());
        if let Some(number) = number {
            pages.push((number, path));
        }
    }
    pages.sort_by_key(|(number, _)| *number);

    let mut images = Vec::with_capacity(pages.len());
    for (_, path) in pages {
        let image = image::open(&path).map_err(|e| AcquireError::Render(e.to_string()))?;
        images.push(image);
    }

    if images.is_empty() {
        return Err(AcquireError::Render("pdftoppm produced no pages".to_string()));
    }
    Ok(images)
}

// Configuration constants for docsift
use std::env;
use std::path::PathBuf;

// Readability thresholds (character counts after trimming)
pub const MIN_READABLE_CHARS: usize = 10;
pub const MIN_CLASSIFIABLE_CHARS: usize = 50;

// A PDF text layer shorter than this is treated as scanned and routed to OCR
pub const NATIVE_TEXT_MIN_CHARS: usize = 50;

// OCR fallback settings
pub const MAX_OCR_PAGES: usize = 5;
pub const OCR_RENDER_DPI: u32 = 144; // 2x the 72 dpi PDF default
pub const OCR_INPUT_EDGE: u32 = 384;
pub const MAX_DECODE_STEPS: usize = 256;

// Classifier settings
pub const CONFIDENCE_SATURATION: f32 = 20.0;
pub const FILENAME_FALLBACK_THRESHOLD: f32 = 0.2;

// Reconciliation settings
pub const INCOME_VARIANCE_TOLERANCE: f64 = 0.05;

// Borrower wizard step numbers used for discrepancy navigation
pub const WIZARD_STEP_EMPLOYMENT: u32 = 3;
pub const WIZARD_STEP_ASSETS: u32 = 5;

// Get the OCR model directory from environment or use default
pub fn model_dir() -> PathBuf {
    env::var("DOCSIFT_MODEL_DIR")
        .unwrap_or_else(|_| "models".to_string())
        .into()
}

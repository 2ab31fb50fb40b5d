//! OCR-confidence scoring.

use shared_types::CanonicalOcrResult;

/// Placeholder score when no word-level confidence data exists. Kept for
/// compatibility with downstream consumers; not a measured quantity.
const DEFAULT_ACCURACY: f64 = 50.0;

/// Mean word recognition confidence, scaled to 0–100.
///
/// Confidences are taken as already normalized to `[0, 1]` and are not
/// clamped.
pub fn ocr_confidence(ocr: Option<&CanonicalOcrResult>) -> f64 {
    let words = match ocr {
        Some(ocr) if !ocr.words.is_empty() => &ocr.words,
        _ => return DEFAULT_ACCURACY,
    };

    let total: f64 = words.iter().map(|word| word.confidence).sum();
    total / words.len() as f64 * 100.0
}

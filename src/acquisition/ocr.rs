// ONNX OCR engine (TrOCR-style encoder/decoder)
//
// Models load lazily from the configured model directory: encoder.onnx,
// decoder.onnx and tokenizer.json. The deployed checkpoint is a printed-text
// model covering English and Spanish; language coverage is a property of the
// model, not a parameter here.
use anyhow::{anyhow, Context, Result};
use image::{imageops::FilterType, DynamicImage};
use ort::{
    inputs,
    session::builder::GraphOptimizationLevel,
    session::Session,
    value::Value,
};
use tokenizers::Tokenizer;

use crate::config::{model_dir, MAX_DECODE_STEPS, OCR_INPUT_EDGE};

pub struct OcrEngine {
    encoder: Option<Session>,
    decoder: Option<Session>,
    tokenizer: Option<Tokenizer>,
    initialized: bool,
}

impl OcrEngine {
    pub fn new() -> Self {
        Self {
            encoder: None,
            decoder: None,
            tokenizer: None,
            initialized: false,
        }
    }

    fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        let _ = ort::init();
        let dir = model_dir();

        let encoder_path = dir.join("encoder.onnx");
        if encoder_path.exists() {
            self.encoder = Some(
                Session::builder()?
                    .with_optimization_level(GraphOptimizationLevel::Level3)?
                    .with_intra_threads(4)?
                    .commit_from_file(&encoder_path)?,
            );
        }

        let decoder_path = dir.join("decoder.onnx");
        if decoder_path.exists() {
            self.decoder = Some(
                Session::builder()?
                    .with_optimization_level(GraphOptimizationLevel::Level3)?
                    .with_intra_threads(4)?
                    .commit_from_file(&decoder_path)?,
            );
        }

        let tokenizer_path = dir.join("tokenizer.json");
        if tokenizer_path.exists() {
            self.tokenizer = Some(
                Tokenizer::from_file(&tokenizer_path)
                    .map_err(|e| anyhow!("failed to load tokenizer: {e}"))?,
            );
        }

        self.initialized = true;
        tracing::debug!(
            dir = %dir.display(),
            encoder = self.encoder.is_some(),
            decoder = self.decoder.is_some(),
            "OCR engine initialized"
        );
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.initialized && self.encoder.is_some() && self.decoder.is_some()
    }

    /// Recognize the text on one rendered page image.
    pub async fn extract_text(&mut self, image: &DynamicImage) -> Result<String> {
        self.initialize()?;

        let dir = model_dir();
        let pixels = preprocess(image);
        let edge = OCR_INPUT_EDGE as usize;

        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| anyhow!("OCR encoder not found in {}", dir.display()))?;

        let encoder_input =
            Value::from_array(([1_usize, 3, edge, edge], pixels.into_boxed_slice()))?;
        let encoder_outputs = encoder.run(inputs![encoder_input])?;
        let (hidden_shape, hidden_data) = encoder_outputs[0]
            .try_extract_tensor::<f32>()
            .context("encoder produced no hidden states")?;
        let hidden_shape: Vec<usize> = hidden_shape.iter().map(|&d| d as usize).collect();
        let hidden_data = hidden_data.to_vec();

        let decoder = self
            .decoder
            .as_mut()
            .ok_or_else(|| anyhow!("OCR decoder not found in {}", dir.display()))?;
        let tokenizer = self
            .tokenizer
            .as_ref()
            .ok_or_else(|| anyhow!("OCR tokenizer not found in {}", dir.display()))?;

        let bos = tokenizer.token_to_id("<s>").unwrap_or(0) as i64;
        let eos = tokenizer.token_to_id("</s>").unwrap_or(2) as i64;

        // Greedy autoregressive decode, re-running the decoder on the full
        // sequence each step
        let mut ids: Vec<i64> = vec![bos];
        for _ in 0..MAX_DECODE_STEPS {
            let input_ids =
                Value::from_array(([1_usize, ids.len()], ids.clone().into_boxed_slice()))?;
            let hidden = Value::from_array((
                hidden_shape.clone(),
                hidden_data.clone().into_boxed_slice(),
            ))?;
            let outputs = decoder.run(inputs![
                "input_ids" => input_ids,
                "encoder_hidden_states" => hidden,
            ])?;
            let (shape, logits) = outputs[0].try_extract_tensor::<f32>()?;
            let vocab = shape[shape.len() - 1] as usize;
            let seq = shape[shape.len() - 2] as usize;
            let last = &logits[(seq - 1) * vocab..seq * vocab];

            let mut next = 0usize;
            let mut best = f32::NEG_INFINITY;
            for (index, &logit) in last.iter().enumerate() {
                if logit > best {
                    best = logit;
                    next = index;
                }
            }

            if next as i64 == eos {
                break;
            }
            ids.push(next as i64);
        }

        let token_ids: Vec<u32> = ids[1..].iter().map(|&id| id as u32).collect();
        let text = tokenizer
            .decode(&token_ids, true)
            .map_err(|e| anyhow!("token decode failed: {e}"))?;
        Ok(text.trim().to_string())
    }
}

impl Default for OcrEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Resize to the model's square input and normalize to CHW float
fn preprocess(image: &DynamicImage) -> Vec<f32> {
    let edge = OCR_INPUT_EDGE;
    let resized = image
        .resize_exact(edge, edge, FilterType::Lanczos3)
        .to_rgb8();

    let mut pixels = Vec::with_capacity(3 * (edge as usize) * (edge as usize));
    for channel in 0..3 {
        for y in 0..edge {
            for x in 0..edge {
                let pixel = resized.get_pixel(x, y);
                pixels.push(pixel[channel] as f32 / 255.0);
            }
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preprocess_produces_chw_tensor() {
        let image = DynamicImage::new_rgb8(100, 60);
        let pixels = preprocess(&image);
        let edge = OCR_INPUT_EDGE as usize;
        assert_eq!(pixels.len(), 3 * edge * edge);
        assert!(pixels.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn engine_without_models_reports_missing_encoder() {
        // No model directory in the test environment: extraction must fail
        // with a clear error, never panic.
        std::env::set_var("DOCSIFT_MODEL_DIR", "/nonexistent/docsift-models");
        let mut engine = OcrEngine::new();
        let image = DynamicImage::new_rgb8(10, 10);
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(engine.extract_text(&image));
        assert!(result.is_err());
        assert!(!engine.is_ready());
    }
}

//! Crop classifier loading and inference
//!
//! Loads the pre-trained ONNX crop model once at startup via tract and
//! serves read-only inference over the fixed 7-column input. The model
//! handle is shared across requests and never mutated after load.

use std::path::Path;

use anyhow::{Context, Result};
use tract_onnx::prelude::*;

use shared::{ClassProbability, FeatureVector};

/// Number of input features expected by the model
const NUM_FEATURES: usize = 7;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Inference operations consumed by the request pipeline.
///
/// Implementations must be pure and deterministic: identical feature
/// vectors yield identical outputs, and the distribution is reported in
/// the model's native label order.
pub trait Classifier: Send + Sync {
    /// All crop labels known to the model, in native order.
    fn labels(&self) -> &[String];

    /// Predict the single most likely crop label.
    fn predict_label(&self, features: &FeatureVector) -> Result<String>;

    /// Predict the full class-probability distribution, one entry per
    /// label in native order.
    fn predict_distribution(&self, features: &FeatureVector) -> Result<Vec<ClassProbability>>;
}

/// ONNX-backed crop classifier using tract for in-process inference.
pub struct OnnxCropClassifier {
    model: TractModel,
    labels: Vec<String>,
}

impl OnnxCropClassifier {
    /// Load the model artifact and its label file.
    ///
    /// The model must take a `[1, 7]` f32 input and expose the class
    /// probabilities as a plain tensor output (exported without zipmap).
    /// The label file is a JSON array of crop names in model order.
    pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self> {
        let labels: Vec<String> = serde_json::from_str(
            &std::fs::read_to_string(labels_path)
                .with_context(|| format!("Failed to read label file {}", labels_path.display()))?,
        )
        .with_context(|| format!("Failed to parse label file {}", labels_path.display()))?;

        if labels.is_empty() {
            anyhow::bail!("Label file {} lists no crops", labels_path.display());
        }

        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .with_context(|| format!("Failed to parse ONNX model {}", model_path.display()))?
            .with_input_fact(0, f32::fact([1, NUM_FEATURES]).into())
            .context("Failed to set input shape")?
            .into_optimized()
            .context("Failed to optimize model")?
            .into_runnable()
            .context("Failed to create runnable model")?;

        Ok(Self { model, labels })
    }

    /// Convert a feature vector to the model's `[1, 7]` f32 input tensor.
    fn features_to_tensor(features: &FeatureVector) -> Result<Tensor> {
        let data: Vec<f32> = features.as_array().iter().map(|v| *v as f32).collect();
        let array = tract_ndarray::Array2::from_shape_vec((1, NUM_FEATURES), data)
            .context("Failed to shape input tensor")?;
        Ok(array.into())
    }

    /// Run the model and read back one probability per label.
    fn probabilities(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let input = Self::features_to_tensor(features)?;
        let outputs = self.model.run(tvec!(input.into()))?;

        // sklearn exports emit the label output first; the probability
        // tensor is the last output either way.
        let output = outputs.last().context("No output from model")?;
        let view = output
            .to_array_view::<f32>()
            .context("Probability output is not f32")?;
        let probs: Vec<f64> = view.iter().map(|v| *v as f64).collect();

        if probs.len() != self.labels.len() {
            anyhow::bail!(
                "Model emitted {} probabilities for {} labels",
                probs.len(),
                self.labels.len()
            );
        }

        Ok(probs)
    }
}

impl Classifier for OnnxCropClassifier {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn predict_label(&self, features: &FeatureVector) -> Result<String> {
        let probs = self.probabilities(features)?;
        // Argmax, first label wins on ties.
        let (best, _) = probs
            .iter()
            .enumerate()
            .reduce(|a, b| if b.1 > a.1 { b } else { a })
            .context("Model produced an empty distribution")?;
        Ok(self.labels[best].clone())
    }

    fn predict_distribution(&self, features: &FeatureVector) -> Result<Vec<ClassProbability>> {
        let probs = self.probabilities(features)?;
        Ok(self
            .labels
            .iter()
            .zip(probs)
            .map(|(crop, probability)| ClassProbability {
                crop: crop.clone(),
                probability,
            })
            .collect())
    }
}

//! End-to-end analysis: bytes in, undertone and recommendations out

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, ConfigError};
use crate::preference::Preferences;
use crate::recommend::{recommend_for, ColorEntry};
use crate::skin::{SkinExtractor, SkinSample, SkinThresholds, DEFAULT_MIN_SKIN_PIXELS};
use crate::undertone::{Undertone, UndertoneClassifier, DEFAULT_UNDERTONE_MARGIN};

/// Tunable constants of the pipeline.
///
/// Deserializes from a partial document; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// HSV box that counts as skin
    pub skin: SkinThresholds,
    /// Minimum skin pixels for a usable sample
    pub min_skin_pixels: usize,
    /// Dead band around red = blue that classifies as neutral
    pub undertone_margin: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            skin: SkinThresholds::default(),
            min_skin_pixels: DEFAULT_MIN_SKIN_PIXELS,
            undertone_margin: DEFAULT_UNDERTONE_MARGIN,
        }
    }
}

/// Output of one analysis. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub undertone: Undertone,
    pub colors: Vec<ColorEntry>,
    pub outfits: Vec<String>,
    /// Skin statistics behind the undertone; not part of the wire format
    #[serde(skip)]
    pub skin: SkinSample,
}

/// Decode JPEG or PNG bytes into an 8-bit RGB image.
pub fn decode(bytes: &[u8]) -> Result<RgbImage, AnalysisError> {
    if bytes.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// The analysis pipeline: decode, extract skin, classify, recommend.
///
/// Holds only immutable settings, so one instance can serve concurrent
/// requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    extractor: SkinExtractor,
    classifier: UndertoneClassifier,
}

impl Analyzer {
    /// Build an analyzer, validating thresholds and margin.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            extractor: SkinExtractor::new(config.skin, config.min_skin_pixels)?,
            classifier: UndertoneClassifier::new(config.undertone_margin)?,
        })
    }

    pub fn extractor(&self) -> &SkinExtractor {
        &self.extractor
    }

    pub fn classifier(&self) -> &UndertoneClassifier {
        &self.classifier
    }

    /// Analyze encoded image bytes with caller-supplied preference strings.
    ///
    /// Preferences are validated before any decoding work, so an invalid
    /// option fails fast with [`AnalysisError::UnknownPreference`].
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::UnknownPreference`] for an unrecognized style or formality
    /// - [`AnalysisError::EmptyInput`] / [`AnalysisError::Decode`] for unreadable bytes
    /// - [`AnalysisError::NoSkinDetected`] when the photo has no usable skin region
    pub fn analyze(
        &self,
        bytes: &[u8],
        style: &str,
        formality: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let preferences = Preferences::parse(style, formality)?;
        let image = decode(bytes)?;
        self.analyze_image(&image, preferences)
    }

    /// Analyze an already decoded image.
    pub fn analyze_image(
        &self,
        image: &RgbImage,
        preferences: Preferences,
    ) -> Result<AnalysisResult, AnalysisError> {
        let skin = self.extractor.extract(image)?;
        let undertone = self.classifier.classify(&skin.mean);

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            skin_pixels = skin.pixel_count,
            mean_r = skin.mean.r,
            mean_g = skin.mean.g,
            mean_b = skin.mean.b,
            undertone = %undertone,
            "Classified skin undertone"
        );

        let recommendation = recommend_for(undertone, preferences);

        Ok(AnalysisResult {
            undertone,
            colors: recommendation.colors.to_vec(),
            outfits: recommendation
                .outfits
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skin,
        })
    }
}

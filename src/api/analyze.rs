use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Json,
};
use serde::Serialize;
use skin_tone::{AnalysisResult, Analyzer, Formality, Style};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Multipart form accepted by /analyze (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeForm {
    /// Facial photograph (JPEG or PNG)
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
    /// "subtle" (default) or "bold"
    style: Option<String>,
    /// "casual" (default) or "professional"
    formality: Option<String>,
}

/// A recommended color
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorResponse {
    /// Display name
    #[schema(example = "Terracotta")]
    pub name: String,
    /// Hex code in #RRGGBB form
    #[schema(example = "#E2725B")]
    pub hex: String,
}

/// Successful analysis
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Always true
    pub success: bool,
    /// "warm", "cool" or "neutral"
    #[schema(example = "warm")]
    pub undertone: String,
    /// Six recommended colors
    pub colors: Vec<ColorResponse>,
    /// Three outfit suggestions
    pub outfits: Vec<String>,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            success: true,
            undertone: result.undertone.to_string(),
            colors: result
                .colors
                .iter()
                .map(|c| ColorResponse {
                    name: c.name.to_string(),
                    hex: c.hex.to_string(),
                })
                .collect(),
            outfits: result.outfits,
        }
    }
}

/// Failed analysis
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeErrorResponse {
    /// Always false
    pub success: bool,
    /// DecodeError, NoSkinDetected, UnknownPreference, InvalidRequest,
    /// PayloadTooLarge or Internal
    #[schema(example = "NoSkinDetected")]
    pub error: String,
    /// Guidance for the user
    pub message: String,
}

/// Fields collected from the multipart body
struct AnalyzeUpload {
    image: Bytes,
    style: String,
    formality: String,
}

async fn read_upload(mut multipart: Multipart) -> Result<AnalyzeUpload, ApiError> {
    let mut image = None;
    let mut style = None;
    let mut formality = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") => image = Some(field.bytes().await?),
            Some("style") => style = Some(field.text().await?),
            Some("formality") => formality = Some(field.text().await?),
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown form field");
            }
        }
    }

    Ok(AnalyzeUpload {
        image: image.ok_or_else(|| ApiError::InvalidRequest("missing field `image`".into()))?,
        // Absent fields take the defaults; present-but-invalid values are
        // rejected by the analyzer
        style: style.unwrap_or_else(|| Style::default().to_string()),
        formality: formality.unwrap_or_else(|| Formality::default().to_string()),
    })
}

/// Analyze a selfie
///
/// Detects the skin undertone in the uploaded photo and returns a color
/// palette and outfit suggestions for the requested style and formality.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body(content = AnalyzeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Analysis succeeded", body = AnalyzeResponse),
        (status = 400, description = "Unreadable image, invalid option or malformed form", body = AnalyzeErrorResponse),
        (status = 413, description = "Upload exceeds the configured limit", body = AnalyzeErrorResponse),
        (status = 422, description = "No skin detected in the image", body = AnalyzeErrorResponse),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(analyzer): State<Arc<Analyzer>>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let upload = read_upload(multipart).await?;

    tracing::info!(
        bytes = upload.image.len(),
        style = %upload.style,
        formality = %upload.formality,
        "Analysis request received"
    );

    // Pixel work is CPU-bound; keep it off the async workers
    let result = tokio::task::spawn_blocking(move || {
        analyzer.analyze(&upload.image, &upload.style, &upload.formality)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))?;

    match result {
        Ok(result) => {
            tracing::info!(
                undertone = %result.undertone,
                skin_pixels = result.skin.pixel_count,
                coverage = result.skin.coverage(),
                "Analysis complete"
            );
            Ok(Json(result.into()))
        }
        Err(e) => {
            tracing::warn!(kind = %e.kind(), error = %e, "Analysis rejected");
            Err(e.into())
        }
    }
}

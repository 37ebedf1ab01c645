//! QR share artifact: encodes an arbitrary URL into a scannable SVG image.
//! No dependency on scoring state.

use qrcode::render::svg;
use qrcode::QrCode;

use crate::errors::AppError;

pub fn svg_for_url(url: &str) -> Result<String, AppError> {
    if url.trim().is_empty() {
        return Err(AppError::Validation("url must not be empty".to_string()));
    }
    let code = QrCode::new(url.as_bytes())
        .map_err(|e| AppError::Validation(format!("Cannot encode URL as a QR code: {e}")))?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(240, 240)
        .build())
}

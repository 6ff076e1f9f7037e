//! QR code generation tool definition.
//!
//! Encodes text as a QR code (error correction level L, smallest version
//! that fits), rasterizes it to PNG and returns it as a base64 data URI.

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{self, error_result, parse_params, run_isolated};
use crate::domains::tools::{ToolContext, ToolError};

/// Prefix of the returned data URI.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Marker at the start of every successful result.
pub const SUCCESS_MARKER: &str = "QR Code generated successfully";

const MAX_MODULE_SIZE: u32 = 50;
const MAX_BORDER: u32 = 20;
const MAX_IMAGE_PIXELS: u32 = 4096;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the QR code tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QrCodeParams {
    /// Text to encode.
    #[schemars(description = "Text or URL to encode")]
    pub text: String,

    /// Pixels per QR module.
    #[serde(default = "default_size")]
    #[schemars(description = "Pixel size of each QR module (default: 10, max: 50)")]
    pub size: u32,

    /// Quiet zone width in modules.
    #[serde(default = "default_border")]
    #[schemars(description = "Border width in modules (default: 4, max: 20)")]
    pub border: u32,
}

fn default_size() -> u32 {
    10
}

fn default_border() -> u32 {
    4
}

// ============================================================================
// Tool Definition
// ============================================================================

/// QR code tool - returns a PNG QR code as base64.
pub struct QrCodeTool;

impl QrCodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_qr_code";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a QR code for the given text and return it as a base64 encoded PNG image (data URI).";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(size = params.size, border = params.border))]
    pub fn execute(params: &QrCodeParams) -> CallToolResult {
        info!("Generating QR code for {} bytes of text", params.text.len());

        let png = match render_png(&params.text, params.size, params.border) {
            Ok(png) => png,
            Err(e) => return error_result(&e.to_string()),
        };
        let payload = BASE64.encode(&png);

        let message = format!(
            "{} for: '{}'\nBase64 image data: {}{}\nUse this in an image viewer or HTML to see the QR code.",
            SUCCESS_MARKER, params.text, DATA_URI_PREFIX, payload
        );

        info!("QR code generated ({} bytes PNG)", png.len());

        CallToolResult::success(vec![Content::text(message), Content::image(payload, "image/png")])
    }

    /// Dispatch entry point.
    pub fn handle(arguments: JsonObject, _context: &ToolContext) -> Result<CallToolResult, ToolError> {
        let params: QrCodeParams = parse_params(arguments)?;
        Ok(run_isolated(Self::NAME, move || Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<QrCodeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(context: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::create_route(Self::to_tool(), context, Self::handle)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Encode `text` and rasterize it to PNG bytes.
///
/// `size` is the pixel width of one module, `border` the quiet zone in
/// modules on each side.
pub fn render_png(text: &str, size: u32, border: u32) -> Result<Vec<u8>, ToolError> {
    if text.is_empty() {
        return Err(ToolError::invalid_arguments("text must not be empty"));
    }
    if !(1..=MAX_MODULE_SIZE).contains(&size) {
        return Err(ToolError::invalid_arguments(format!(
            "size must be between 1 and {} (got {})",
            MAX_MODULE_SIZE, size
        )));
    }
    if border > MAX_BORDER {
        return Err(ToolError::invalid_arguments(format!(
            "border must be between 0 and {} (got {})",
            MAX_BORDER, border
        )));
    }

    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)
        .map_err(|e| ToolError::encoding(e.to_string()))?;

    let modules = code.width() as u32;
    let pixels = (modules + 2 * border) * size;
    if pixels > MAX_IMAGE_PIXELS {
        return Err(ToolError::invalid_arguments(format!(
            "image would be {0}x{0} pixels (max {1}); use a smaller size or border",
            pixels, MAX_IMAGE_PIXELS
        )));
    }

    let colors = code.to_colors();
    let image = GrayImage::from_fn(pixels, pixels, |x, y| {
        let mx = (x / size).checked_sub(border);
        let my = (y / size).checked_sub(border);
        let dark = match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                colors[(my * modules + mx) as usize] == Color::Dark
            }
            _ => false,
        };
        Luma([if dark { 0 } else { 255 }])
    });

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ToolError::encoding(e.to_string()))?;
    Ok(png)
}

// ============================================================================
// Tests
// ============================================================================

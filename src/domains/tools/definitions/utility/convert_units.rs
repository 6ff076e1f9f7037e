//! Unit conversion tool definition.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{self, into_result, parse_params, run_isolated};
use crate::domains::tools::{ToolContext, ToolError};
use crate::domains::units::UnitConverter;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the unit conversion tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConvertUnitsParams {
    #[schemars(description = "Numeric value to convert")]
    pub value: f64,

    #[schemars(description = "Source unit, e.g. 'celsius', 'km', 'pound'")]
    pub from_unit: String,

    #[schemars(description = "Target unit, e.g. 'fahrenheit', 'mile', 'kg'")]
    pub to_unit: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Unit conversion tool.
pub struct ConvertUnitsTool;

impl ConvertUnitsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "convert_units";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert a value between units of measurement. \
         Supports temperature (celsius, fahrenheit, kelvin), length, weight, volume, time, area, speed and data size.";

    /// Execute the tool logic against a resolver chain.
    #[instrument(skip_all, fields(from = %params.from_unit, to = %params.to_unit))]
    pub fn execute(params: &ConvertUnitsParams, units: &UnitConverter) -> CallToolResult {
        info!("Converting {} {} to {}", params.value, params.from_unit, params.to_unit);
        into_result(
            units
                .convert(params.value, &params.from_unit, &params.to_unit)
                .map(|conversion| conversion.to_string())
                .map_err(ToolError::from),
        )
    }

    /// Dispatch entry point.
    pub fn handle(arguments: JsonObject, context: &ToolContext) -> Result<CallToolResult, ToolError> {
        let params: ConvertUnitsParams = parse_params(arguments)?;
        let units = context.units.clone();
        Ok(run_isolated(Self::NAME, move || Self::execute(&params, &units)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ConvertUnitsParams>(),
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
// Tests
// ============================================================================

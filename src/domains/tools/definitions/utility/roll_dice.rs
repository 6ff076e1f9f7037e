//! Dice rolling tool definition.
//!
//! Rolls tabletop dice notation (`2d6+3`) one or more times and reports
//! every die, the modifier and the totals.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::dice::{self, DieSource, RandomDice};
use crate::domains::tools::definitions::common::{self, into_result, parse_params, run_isolated};
use crate::domains::tools::{ToolContext, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the dice tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollDiceParams {
    /// Dice notation, e.g. "2d6+3".
    #[schemars(description = "Dice notation such as '2d6+3', 'd20' or '3d8-2'")]
    pub notation: String,

    /// How many times to roll the notation.
    #[serde(default = "default_num_rolls")]
    #[schemars(description = "Number of independent rolls (default: 1, max: 100)")]
    pub num_rolls: u32,
}

fn default_num_rolls() -> u32 {
    1
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Dice tool - evaluates dice notation with a pseudo-random source.
pub struct RollDiceTool;

impl RollDiceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_dice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Roll the dice with the given notation (e.g. '2d6+3', 'd20', '3d8-2'). \
         Optionally repeat the roll several times; reports each die, the modifier, per-roll totals and a grand total.";

    /// Execute the tool logic with the given die source.
    #[instrument(skip_all, fields(notation = %params.notation, num_rolls = params.num_rolls))]
    pub fn execute(params: &RollDiceParams, dice: &mut impl DieSource) -> CallToolResult {
        info!("Rolling {} x{}", params.notation, params.num_rolls);
        into_result(
            dice::evaluate_with(&params.notation, params.num_rolls, dice).map_err(ToolError::from),
        )
    }

    /// Dispatch entry point: parse arguments and roll on a worker thread.
    pub fn handle(arguments: JsonObject, _context: &ToolContext) -> Result<CallToolResult, ToolError> {
        let params: RollDiceParams = parse_params(arguments)?;
        Ok(run_isolated(Self::NAME, move || {
            Self::execute(&params, &mut RandomDice::thread_local())
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RollDiceParams>(),
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

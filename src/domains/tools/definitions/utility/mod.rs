//! Self-contained tools that never touch the network.

pub mod convert_units;
pub mod qr_code;
pub mod roll_dice;

pub use convert_units::{ConvertUnitsParams, ConvertUnitsTool};
pub use qr_code::{QrCodeParams, QrCodeTool};
pub use roll_dice::{RollDiceParams, RollDiceTool};

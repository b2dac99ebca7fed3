//! Turn rules: what may be played, and what playing it does.
//!
//! ## Components
//!
//! - **legality**: per-card move checks and the selectable action set
//! - **resolve**: snapshot-in, snapshot-out action resolution

pub mod legality;
pub mod resolve;

pub use legality::{check_crown_move, selectable_actions, MoveCheck};
pub use resolve::resolve_action;

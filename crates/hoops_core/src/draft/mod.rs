//! Draft flows: pool queries, the interactive snake draft and auto drafting

pub mod auto;
pub mod pool;
pub mod state;

pub use auto::{auto_draft, draft_sequential};
pub use pool::{
    best_of, find_player, list_by_position, ranked_by_position, sample_options, DEFAULT_OPTIONS,
};
pub use state::{DraftState, PickRecord, ROUNDS, TOTAL_PICKS};

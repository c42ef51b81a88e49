pub mod json_api;

pub use json_api::{
    run_game_request, simulate_game_json, GameRequest, GameResponse, TeamRequest,
};

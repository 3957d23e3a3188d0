//! Terminal rendering for the game and results screens.

pub mod game_scene;
pub mod score_scene;
pub mod screen_frame;

pub use game_scene::render_game_scene;
pub use score_scene::render_score_scene;

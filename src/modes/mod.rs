pub mod game_loop;
pub mod play;

pub use game_loop::{Ending, GameLoop, Phase};
pub use play::PlayMode;

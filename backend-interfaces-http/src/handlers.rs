pub mod bonus_handlers;
pub mod game_handlers;
pub mod ops_handlers;

pub use bonus_handlers::*;
pub use game_handlers::*;
pub use ops_handlers::*;

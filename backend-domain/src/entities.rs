// Domain entities
// Plain ledger records plus the request/response shapes built around them

pub mod config;
pub mod daily_bonus;
pub mod game_score;
pub mod requests;
pub mod stats;

pub use config::*;
pub use daily_bonus::*;
pub use game_score::*;
pub use requests::*;
pub use stats::*;

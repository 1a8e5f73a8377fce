pub mod bonus_commands;
pub mod roulette_commands;
pub mod score_commands;

pub mod bonus_queries;
pub mod stats_queries;

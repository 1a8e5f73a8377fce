// Domain services

pub mod roulette;

pub use roulette::*;

// Game modules: combat rules, pet sprites, settings

pub mod combat;
pub mod config;
pub mod pets;

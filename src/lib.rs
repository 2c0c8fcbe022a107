// Library root: the game rules and engine pieces the window binary drives.
//
// - `core`: shared time helpers
// - `engine`: asset loading, keyboard input and the tick driver
// - `game`: combat rules, configuration and pet sprite animation

pub mod core;
pub mod engine;
pub mod game;

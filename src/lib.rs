//! Armenian alphabet arcade game.
//!
//! The player walks along the ground, picks up eight alphabet glyphs and then
//! jumps on the boss until it gives up. Everything in this library is pure game
//! state; terminal I/O lives in the binary.

pub mod alphabet;
pub mod compute;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod input;
pub mod tuning;

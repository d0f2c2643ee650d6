//! Movement rules for a two-layer tilemap puzzle: a terrain layer of walls and floor, and an
//! items layer of boxes, doors, goals and start markers the player walks into.
//!
//! [`core::Board::resolve_move`] is the single entry point a player controller calls once per
//! input tick.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod models;

#[cfg(test)]
mod test;

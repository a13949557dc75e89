//! Neutron engine library.
//!
//! Exposes the board representation, move generation, players, turn
//! engine, and text front-end for use by integration tests and the binary
//! entry points.

pub mod board;
pub mod console;
pub mod game;
pub mod interface;
pub mod movegen;
pub mod player;
pub mod protocol;
pub mod selfplay;

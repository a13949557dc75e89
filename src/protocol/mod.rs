//! Text notations.
//!
//! Compact board layouts (`22222/00000/00300/00000/11111`) for records and
//! fixtures, and parsing of `row,col` selections typed by a human player.

pub mod layout;
pub mod parser;

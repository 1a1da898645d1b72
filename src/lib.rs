//! Bounded-playfield arcade shooter: a ship dodges falling asteroids, shoots
//! them for score, and faces a boss every third level.
//!
//! `entities` and `compute` hold the whole simulation and know nothing about
//! the terminal; `assets` maps levels to visual identifiers; `display` and
//! the binary wrap everything in a crossterm front end.

pub mod assets;
pub mod compute;
pub mod display;
pub mod entities;

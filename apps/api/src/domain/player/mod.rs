// Player domain module
// Contains the player entity, its name value object and team labels

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::Player;
pub use value_objects::{PlayerName, Team};

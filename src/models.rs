pub mod catalog;
pub mod game;

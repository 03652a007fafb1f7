pub mod board;
pub mod generator;
pub mod rules;

pub mod cli;
pub mod commands;
pub mod error;
pub mod parse;
pub mod render;
pub mod scale;

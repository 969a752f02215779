pub mod generator;
pub mod handlers;
pub mod interpreter;
pub mod prompt_builder;

pub mod handlers;
pub mod influence;
pub mod questions;
pub mod scoring;

pub mod personality;
pub mod trip;

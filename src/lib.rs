pub mod batch;
pub mod cover;
pub mod error;
pub mod render;

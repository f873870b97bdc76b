pub mod levels;
pub mod write;

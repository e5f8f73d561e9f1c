pub mod mode;
pub mod narrative;

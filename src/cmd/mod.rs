pub mod crack;
pub mod decrypt;

pub mod engine;
pub mod refiner;

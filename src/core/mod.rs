pub mod cleaners;
pub mod cmudict;
pub mod converter;
pub mod engine;
pub mod numbers;
pub mod symbols;
pub mod types;

pub mod athlete;
pub mod audit;

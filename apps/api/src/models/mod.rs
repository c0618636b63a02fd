pub mod assessment;
pub mod training;

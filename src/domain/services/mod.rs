pub mod fairness;
pub mod grouping;
pub mod rotation;

pub use fairness::*;
pub use grouping::*;
pub use rotation::*;

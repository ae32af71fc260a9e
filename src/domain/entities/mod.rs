pub mod assignment;
pub mod employee;
pub mod holiday;

pub use assignment::*;
pub use employee::*;
pub use holiday::*;

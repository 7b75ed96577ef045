pub mod math;
pub mod traits;

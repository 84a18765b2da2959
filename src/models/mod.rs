pub mod availability;
pub mod time;

pub use availability::*;
pub use time::*;

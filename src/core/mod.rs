pub mod age;
pub mod demo;

pub use crate::domain::model::Person;
pub use crate::domain::ports::{Clock, FixedClock, Greeter, SystemClock};
pub use crate::utils::error::Result;

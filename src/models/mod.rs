pub mod observer;
pub mod time;

pub use observer::*;
pub use time::*;

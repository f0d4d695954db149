mod default;
mod keywords;

pub use default::*;
pub use keywords::*;

mod texts;

pub use texts::*;

mod required;

pub use required::*;

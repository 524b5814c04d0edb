mod glob_matcher;

pub use glob_matcher::*;

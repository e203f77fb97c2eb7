//! iconfont CLI library.

pub mod cli;
pub mod prompt;
pub mod report;
pub mod spinner;

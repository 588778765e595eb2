pub mod completion;
pub mod config;
pub mod lint;
pub mod rules;

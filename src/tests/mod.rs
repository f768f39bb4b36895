pub mod common;
pub mod examples;

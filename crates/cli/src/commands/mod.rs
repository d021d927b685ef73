pub mod harness;
pub mod spf;

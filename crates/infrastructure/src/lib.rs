pub mod dns;
pub mod providers;

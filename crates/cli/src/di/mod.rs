mod providers;

pub use providers::build_registry;

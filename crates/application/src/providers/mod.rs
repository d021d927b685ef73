pub mod registry;

pub use registry::{ProviderConstructor, ProviderRegistry};

pub mod query;

pub use query::{register_query_provider, QueryProvider, QUERY_PROVIDER_TYPE};

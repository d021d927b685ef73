mod builders;

pub use builders::RecordBuilder;

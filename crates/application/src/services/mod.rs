mod group_differ;
mod record_decoder;
mod record_type_map;

pub use group_differ::GroupDiffer;
pub use record_decoder::RecordDecoder;
pub use record_type_map::RecordTypeMapper;

mod deleted_at;
mod source;
mod sub_source;

pub use deleted_at::{zero_instant, DeletedAt};
pub use source::{Source, SourceRef};
pub use sub_source::SubSource;

pub mod config;
pub mod exception;
pub mod modification;
pub mod page;
pub mod param;
pub mod util;

pub use config::{Config, TimestampKind};
pub use exception::Exception;
pub use modification::{
    format_last_modification, last_modification, ExecutableModified, FileModified,
    FixedTimestamp, ModificationSource, ProcessStart,
};
pub use page::PageDocument;
pub use util::escape_string;

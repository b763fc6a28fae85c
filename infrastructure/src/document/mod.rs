//! Document sources backed by the local file system

mod file_source;

pub use file_source::FileDocumentSource;

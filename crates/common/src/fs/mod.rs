mod safe_write;

pub use safe_write::{FlushingWriter, SafeFileWriter, WriteMode};

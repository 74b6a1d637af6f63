pub mod inspect;
pub mod reader;

pub use inspect::{inspect_header, inspect_length, FormatInspector, FormatWarning};
pub use reader::ChunkReader;

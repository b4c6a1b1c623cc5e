pub mod collector;
pub mod extractor;
pub mod scanner;
pub mod source;

pub use collector::{FileTypes, TypeCollector};
pub use extractor::{TypedefExtractor, TypedefKind, TypedefOccurrence};
pub use scanner::{FileScanner, SourceFile};
pub use source::read_source;

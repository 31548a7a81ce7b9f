mod archive;
mod extractor;
mod pipeline;

pub mod extractors;

pub use archive::ArchiveExtractor;
pub use extractor::DocumentExtractor;
pub use extractors::TextParser;
pub use pipeline::UploadPipeline;

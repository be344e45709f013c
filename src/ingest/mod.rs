pub mod normalize;
pub mod source;
pub mod writer;

pub use normalize::Normalizer;
pub use source::CsvSource;
pub use writer::ArtifactWriter;

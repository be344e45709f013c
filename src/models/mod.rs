pub mod document;
pub mod posting;
pub mod record;

pub use document::{CompositeDocument, SectionLabel};
pub use posting::JobPosting;
pub use record::{Columns, SourceRecord};

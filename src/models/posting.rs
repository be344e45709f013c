use crate::ingest::normalize::Normalizer;
use crate::models::document::{CompositeDocument, SectionLabel};
use crate::models::record::SourceRecord;

pub const COL_JOB_ID: &str = "job_id";
pub const COL_TITLE: &str = "title";
pub const COL_DESCRIPTION: &str = "description";
pub const COL_SKILLS: &str = "skills_desc";
pub const COL_EXPERIENCE: &str = "formatted_experience_level";
pub const COL_WORK_TYPE: &str = "formatted_work_type";

/// A job posting with every text field normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPosting {
    /// Trimmed `job_id`, `None` when absent, empty or a null placeholder.
    pub job_id: Option<String>,
    pub title: String,
    pub experience_level: String,
    pub work_type: String,
    pub skills: String,
    pub description: String,
}

impl JobPosting {
    /// Extract and normalize the known columns. Missing columns read as empty.
    #[must_use]
    pub fn from_record(record: &SourceRecord<'_>, normalizer: &Normalizer) -> Self {
        let job_id = normalizer.clean(record.field(COL_JOB_ID));
        Self {
            job_id: (!job_id.is_empty()).then_some(job_id),
            title: normalizer.clean(record.field(COL_TITLE)),
            experience_level: normalizer.clean(record.field(COL_EXPERIENCE)),
            work_type: normalizer.clean(record.field(COL_WORK_TYPE)),
            skills: normalizer.clean(record.field(COL_SKILLS)),
            description: normalizer.clean(record.field(COL_DESCRIPTION)),
        }
    }

    /// Postings without a description are not worth emitting.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    #[must_use]
    pub fn document(&self) -> CompositeDocument {
        CompositeDocument::from_fields([
            (SectionLabel::Title, self.title.clone()),
            (SectionLabel::ExperienceLevel, self.experience_level.clone()),
            (SectionLabel::WorkType, self.work_type.clone()),
            (SectionLabel::SkillsRequired, self.skills.clone()),
            (SectionLabel::Description, self.description.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::Columns;
    use csv::StringRecord;

    fn posting(headers: &[&str], values: &[&str]) -> JobPosting {
        let cols = Columns::from_headers(&StringRecord::from(headers.to_vec()));
        let rec = SourceRecord::new(0, &cols, StringRecord::from(values.to_vec()));
        JobPosting::from_record(&rec, &Normalizer::new())
    }

    #[test]
    fn engineer_example() {
        let p = posting(
            &["title", "description", "job_id"],
            &["Engineer", "Build <b>stuff</b>", "42"],
        );
        assert_eq!(p.job_id.as_deref(), Some("42"));
        assert!(p.has_description());
        assert_eq!(
            p.document().render(),
            "Title: Engineer\nDescription: Build stuff"
        );
    }

    #[test]
    fn all_fields() {
        let p = posting(
            &[
                "job_id",
                "title",
                "description",
                "skills_desc",
                "formatted_experience_level",
                "formatted_work_type",
            ],
            &[
                " 9 ",
                "<h1>Data   Analyst</h1>",
                "Crunch\nnumbers",
                "SQL, Python",
                "Entry level",
                "Part-time",
            ],
        );
        assert_eq!(p.job_id.as_deref(), Some("9"));
        assert_eq!(
            p.document().render(),
            "Title: Data Analyst\n\
             Experience Level: Entry level\n\
             Work Type: Part-time\n\
             Skills Required: SQL, Python\n\
             Description: Crunch numbers"
        );
    }

    #[test]
    fn nan_description_has_no_description() {
        let p = posting(&["title", "description"], &["X", "nan"]);
        assert!(!p.has_description());
        assert_eq!(p.document().render(), "Title: X");
    }

    #[test]
    fn missing_columns_are_empty() {
        let p = posting(&["description"], &["only this"]);
        assert_eq!(p.job_id, None);
        assert_eq!(p.title, "");
        assert_eq!(p.document().render(), "Description: only this");
    }

    #[test]
    fn blank_or_nan_job_id_is_none() {
        assert_eq!(posting(&["job_id", "description"], &["", "d"]).job_id, None);
        assert_eq!(posting(&["job_id", "description"], &["NaN", "d"]).job_id, None);
    }
}

use std::fmt;

/// Section labels of a composite document, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SectionLabel {
    Title,
    ExperienceLevel,
    WorkType,
    SkillsRequired,
    Description,
}

impl SectionLabel {
    /// All labels in the order they appear in a document.
    pub const ORDER: [SectionLabel; 5] = [
        Self::Title,
        Self::ExperienceLevel,
        Self::WorkType,
        Self::SkillsRequired,
        Self::Description,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::ExperienceLevel => "Experience Level",
            Self::WorkType => "Work Type",
            Self::SkillsRequired => "Skills Required",
            Self::Description => "Description",
        }
    }
}

/// A populated `Label: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    label: SectionLabel,
    value: String,
}

/// Labeled sections joined by newlines. Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeDocument {
    sections: Vec<Section>,
}

impl CompositeDocument {
    /// Build from `(label, value)` pairs. Pairs with an empty value are
    /// dropped and the rest are sorted into [`SectionLabel::ORDER`].
    #[must_use]
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (SectionLabel, String)>,
    {
        let mut sections: Vec<Section> = fields
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| Section { label, value })
            .collect();
        sections.sort_by_key(|s| s.label);
        Self { sections }
    }

    /// Render the document text (no trailing newline).
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompositeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", section.label.as_str(), section.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_fixed_order() {
        let doc = CompositeDocument::from_fields([
            (SectionLabel::Description, "Do things".to_string()),
            (SectionLabel::SkillsRequired, "Rust".to_string()),
            (SectionLabel::Title, "Engineer".to_string()),
            (SectionLabel::WorkType, "Full-time".to_string()),
            (SectionLabel::ExperienceLevel, "Senior".to_string()),
        ]);
        assert_eq!(
            doc.render(),
            "Title: Engineer\n\
             Experience Level: Senior\n\
             Work Type: Full-time\n\
             Skills Required: Rust\n\
             Description: Do things"
        );
    }

    #[test]
    fn omits_empty_sections() {
        let doc = CompositeDocument::from_fields([
            (SectionLabel::Title, String::new()),
            (SectionLabel::WorkType, "Contract".to_string()),
            (SectionLabel::Description, "Ship it".to_string()),
        ]);
        assert_eq!(doc.render(), "Work Type: Contract\nDescription: Ship it");
    }

    #[test]
    fn empty_document_renders_empty() {
        let doc = CompositeDocument::from_fields([
            (SectionLabel::Title, String::new()),
            (SectionLabel::Description, String::new()),
        ]);
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn order_constant_matches_ord() {
        let mut sorted = SectionLabel::ORDER;
        sorted.sort();
        assert_eq!(sorted, SectionLabel::ORDER);
    }
}

/// Top-level sections of the contract, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Introduction,
    Summary,
    Agreements,
    Details,
    Cancellation,
    Legal,
    Copyright,
    Phases,
    Payments,
    Signatures,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Introduction,
        Section::Summary,
        Section::Agreements,
        Section::Details,
        Section::Cancellation,
        Section::Legal,
        Section::Copyright,
        Section::Phases,
        Section::Payments,
        Section::Signatures,
    ];

    /// Heading text used for the section in the rendered document.
    pub fn title(self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::Summary => "Project Summary",
            Section::Agreements => "Agreements of Both Parties",
            Section::Details => "Details of the Work",
            Section::Cancellation => "Cancelling this Contract",
            Section::Legal => "Legal Stuff",
            Section::Copyright => "Copyrights and Intellectual Properties",
            Section::Phases => "Project Phases",
            Section::Payments => "Payments",
            Section::Signatures => "Signatures",
        }
    }

    pub fn from_title(title: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| section.title() == title)
    }
}

use crate::lexicon;

/// Tunables for the segmentation heuristics.
///
/// Defaults reproduce the layout of the published annals; the builder
/// exists so the heuristics stay testable against lexicon and banner
/// changes without touching the segmenter itself.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    /// Leading pages (cover, committees, summary) that never hold records.
    pub front_matter_pages: usize,
    /// Title of the page that switches the carried work type to
    /// exposition.
    pub section_banner: String,
    /// Lead-in table used to find where an abstract begins.
    pub lead_ins: Vec<String>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            front_matter_pages: 6,
            section_banner: lexicon::SECTION_BANNER.to_string(),
            lead_ins: lexicon::ABSTRACT_LEAD_INS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ParsingConfig {
    pub fn builder() -> ParsingConfigBuilder {
        ParsingConfigBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct ParsingConfigBuilder {
    config: ParsingConfig,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ParsingConfig::default(),
        }
    }

    /// Number of leading pages to skip entirely.
    pub fn front_matter_pages(mut self, pages: usize) -> Self {
        self.config.front_matter_pages = pages;
        self
    }

    /// Replace the section banner title.
    pub fn section_banner(mut self, banner: impl Into<String>) -> Self {
        self.config.section_banner = banner.into();
        self
    }

    /// Replace the whole lead-in table.
    pub fn set_lead_ins(mut self, lead_ins: Vec<String>) -> Self {
        self.config.lead_ins = lead_ins;
        self
    }

    /// Add one entry to the default lead-in table.
    pub fn add_lead_in(mut self, lead_in: impl Into<String>) -> Self {
        self.config.lead_ins.push(lead_in.into());
        self
    }

    pub fn build(self) -> ParsingConfig {
        self.config
    }
}

impl Default for ParsingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

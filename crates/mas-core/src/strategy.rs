use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One of the four single-shot strategy generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    GoogleAds,
    CreativeContent,
    ContentMarketing,
    CompetitorIntelligence,
}

impl Strategy {
    /// All strategies in display order.
    pub const ALL: [Strategy; 4] = [
        Strategy::GoogleAds,
        Strategy::CreativeContent,
        Strategy::ContentMarketing,
        Strategy::CompetitorIntelligence,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Strategy::GoogleAds => "google-ads",
            Strategy::CreativeContent => "creative-content",
            Strategy::ContentMarketing => "content-marketing",
            Strategy::CompetitorIntelligence => "competitor-intelligence",
        }
    }

    /// Label for the button that triggers this strategy.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Strategy::GoogleAds => "Google Ads Agent",
            Strategy::CreativeContent => "Creative Content Agent",
            Strategy::ContentMarketing => "Content Marketing Agent",
            Strategy::CompetitorIntelligence => "Competitor Intelligence Agent",
        }
    }

    /// Heading of the panel that shows the result.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Strategy::GoogleAds => "Google Ads Plan",
            Strategy::CreativeContent => "Creative Content Plan",
            Strategy::ContentMarketing => "Content Marketing Strategy",
            Strategy::CompetitorIntelligence => "Competitor Monitoring Plan",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.slug() == s)
            .ok_or_else(|| CoreError::UnknownStrategy(s.to_string()))
    }
}

/// Output of one strategy run. `content` is the completion text, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub title: &'static str,
    pub content: String,
}

impl StrategyReport {
    #[must_use]
    pub fn new(strategy: Strategy, content: String) -> Self {
        Self {
            strategy,
            title: strategy.title(),
            content,
        }
    }
}

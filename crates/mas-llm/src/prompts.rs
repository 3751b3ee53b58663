//! Prompt templates.
//!
//! Pure string building. Every template embeds the page text under a
//! `Website Content:` heading, cut to [`MAX_PROMPT_CHARS`] characters here so
//! no caller can exceed the budget.

use mas_core::{truncate_chars, Strategy, MAX_PROMPT_CHARS};

/// System role for the four strategy generators.
pub const STRATEGY_SYSTEM_ROLE: &str = "You are a senior digital marketing expert.";

/// System role for the brand summary used by the multi-agent analysis.
pub const SUMMARY_SYSTEM_ROLE: &str = "You are a digital marketing analyst.";

/// A system + user message pair for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
}

fn instructions(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::GoogleAds => {
            "You are a Google Ads expert. Analyze the following website content and:
- Identify relevant keywords for ad campaigns
- Propose ad groups and audience segmentation
- Write 2 sample text ads
- Suggest budget allocation strategy"
        }
        Strategy::CreativeContent => {
            "You are a creative content strategist. Based on the website content below, generate:
- 3 original post ideas for Instagram or TikTok
- 1 video script idea (30 seconds)
- A catchy slogan related to the brand"
        }
        Strategy::ContentMarketing => {
            "You are a content marketing manager. Based on the website below, provide:
- Blog post topic ideas (5)
- 1 sample blog introduction (150 words)
- SEO keyword suggestions
- Suggestions for newsletter or thought leadership distribution"
        }
        Strategy::CompetitorIntelligence => {
            "You are a competitor intelligence analyst. Given this website, assume it's a client's brand.
Your task is to:
- Suggest types of competitors they should monitor
- Recommend tools or sources to track competitors
- Propose what weekly insights they should collect
- Output it as a report template"
        }
    }
}

const SUMMARY_INSTRUCTIONS: &str =
    "Analyze the following website content and summarize the brand behind it. Cover:
- Brand name
- Industry
- Main products or services
- Tone of voice
- Key marketing keywords";

fn with_content(instructions: &str, site_text: &str) -> String {
    let excerpt = truncate_chars(site_text, MAX_PROMPT_CHARS);
    format!("{instructions}\n\nWebsite Content:\n{excerpt}\n")
}

/// Builds the prompt for one of the four strategy generators.
#[must_use]
pub fn build_strategy_prompt(strategy: Strategy, site_text: &str) -> Prompt {
    Prompt {
        system: STRATEGY_SYSTEM_ROLE,
        user: with_content(instructions(strategy), site_text),
    }
}

/// Builds the brand-summary prompt for the multi-agent analysis.
#[must_use]
pub fn build_summary_prompt(site_text: &str) -> Prompt {
    Prompt {
        system: SUMMARY_SYSTEM_ROLE,
        user: with_content(SUMMARY_INSTRUCTIONS, site_text),
    }
}

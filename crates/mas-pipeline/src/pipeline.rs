//! Run orchestration.
//!
//! Both entry points are strictly sequential and short-circuit on the first
//! error: nothing computed before a failure is returned.

use mas_core::{
    analyze, generate_plan, AgentKind, AgentResult, AnalysisReport, ApiKey, AppConfig, Strategy,
    StrategyReport,
};
use mas_llm::{build_strategy_prompt, build_summary_prompt, CompletionClient, LlmSettings};
use mas_scraper::{PageText, SiteClient};

use crate::error::PipelineError;

/// Shared, immutable run dependencies. Holds no credentials; each run
/// brings its own [`ApiKey`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    site: SiteClient,
    llm: LlmSettings,
}

impl Pipeline {
    #[must_use]
    pub fn new(site: SiteClient, llm: LlmSettings) -> Self {
        Self { site, llm }
    }

    /// Builds the site client and LLM settings from config.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Fetch`] if the HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let site = SiteClient::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;
        Ok(Self::new(site, LlmSettings::from_app_config(config)))
    }

    #[must_use]
    pub fn llm_settings(&self) -> &LlmSettings {
        &self.llm
    }

    async fn fetch(&self, url: &str) -> Result<PageText, PipelineError> {
        let page = self.site.fetch_page_text(url).await?;
        if page.is_truncated() {
            tracing::debug!(
                url = %page.url,
                text_chars = page.char_count(),
                "site text exceeds prompt budget; truncating"
            );
        }
        Ok(page)
    }

    /// Generates one strategy for the page at `url`.
    ///
    /// The report's content is the completion text, unmodified.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Fetch`] if the page cannot be retrieved (no LLM call
    /// is made), [`PipelineError::Completion`] if the LLM call fails.
    pub async fn run_strategy(
        &self,
        api_key: ApiKey,
        url: &str,
        strategy: Strategy,
    ) -> Result<StrategyReport, PipelineError> {
        tracing::info!(url, %strategy, "strategy run started");
        let page = self.fetch(url).await?;

        let prompt = build_strategy_prompt(strategy, page.excerpt());
        let client = CompletionClient::new(&self.llm, api_key)?;
        let content = client.complete(&prompt).await?;

        tracing::info!(url, %strategy, "strategy run finished");
        Ok(StrategyReport::new(strategy, content))
    }

    /// Asks the LLM for a free-text brand summary of `page`.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Completion`] if the LLM call fails.
    pub async fn summarize_brand(
        &self,
        api_key: ApiKey,
        page: &PageText,
    ) -> Result<String, PipelineError> {
        let prompt = build_summary_prompt(page.excerpt());
        let client = CompletionClient::new(&self.llm, api_key)?;
        Ok(client.complete(&prompt).await?)
    }

    /// Multi-agent analysis: summarize the brand, consult every agent in
    /// order, average their scores and assemble the work plan.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Fetch`] or [`PipelineError::Completion`]; when the
    /// summary fails no agent is consulted.
    pub async fn run_analysis(
        &self,
        api_key: ApiKey,
        url: &str,
    ) -> Result<AnalysisReport, PipelineError> {
        tracing::info!(url, "analysis run started");
        let page = self.fetch(url).await?;
        let summary = self.summarize_brand(api_key, &page).await?;

        let agents = consult_agents(&summary);
        let report = AnalysisReport::assemble(summary, agents);

        tracing::info!(
            url,
            average_score = report.average_score,
            go = report.go,
            "analysis run finished"
        );
        Ok(report)
    }
}

/// Runs `analyze` then `generate_plan` on each agent, in fixed order.
#[must_use]
pub fn consult_agents(summary: &str) -> Vec<AgentResult> {
    AgentKind::ALL
        .into_iter()
        .map(|kind| {
            let score = analyze(kind, summary);
            let plan = generate_plan(kind);
            tracing::debug!(agent = %kind, score, "agent consulted");
            AgentResult::new(kind, score, plan)
        })
        .collect()
}

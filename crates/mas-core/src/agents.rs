//! Canned-score agents.
//!
//! Each agent is a row in a fixed table: a constant score and a constant
//! two-item plan. Nothing here looks at the brand summary; `analyze` takes it
//! only so call sites read like the multi-agent flow they model.

use serde::Serialize;

/// Average agent score must be strictly above this for a "go" decision.
pub const GO_THRESHOLD: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    BrandStrategy,
    ContentCreation,
    PaidAdvertising,
    SeoGrowth,
    CompetitorMonitoring,
}

struct AgentProfile {
    name: &'static str,
    score: f64,
    plan: [&'static str; 2],
}

const fn profile(kind: AgentKind) -> AgentProfile {
    match kind {
        AgentKind::BrandStrategy => AgentProfile {
            name: "Brand Strategy",
            score: 8.0,
            plan: [
                "Define a clear brand positioning statement",
                "Align visual identity and tone of voice across all channels",
            ],
        },
        AgentKind::ContentCreation => AgentProfile {
            name: "Content Creation",
            score: 7.0,
            plan: [
                "Publish two short-form social videos per week",
                "Launch a monthly blog series around core products",
            ],
        },
        AgentKind::PaidAdvertising => AgentProfile {
            name: "Paid Advertising",
            score: 6.0,
            plan: [
                "Run a small-budget Google Ads test campaign",
                "Retarget site visitors with display ads",
            ],
        },
        AgentKind::SeoGrowth => AgentProfile {
            name: "SEO & Organic Growth",
            score: 9.0,
            plan: [
                "Optimize product pages for high-intent keywords",
                "Earn backlinks through guest posts and partnerships",
            ],
        },
        AgentKind::CompetitorMonitoring => AgentProfile {
            name: "Competitor Monitoring",
            score: 7.5,
            plan: [
                "Track the top three competitors' pricing and promotions weekly",
                "Set up alerts for competitor brand mentions",
            ],
        },
    }
}

impl AgentKind {
    /// All agents in the order they are consulted.
    pub const ALL: [AgentKind; 5] = [
        AgentKind::BrandStrategy,
        AgentKind::ContentCreation,
        AgentKind::PaidAdvertising,
        AgentKind::SeoGrowth,
        AgentKind::CompetitorMonitoring,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        profile(self).name
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Score the brand. Constant per agent; the summary is ignored.
#[must_use]
pub fn analyze(kind: AgentKind, _brand_summary: &str) -> f64 {
    profile(kind).score
}

/// The agent's recommendations. Constant per agent.
#[must_use]
pub fn generate_plan(kind: AgentKind) -> Vec<String> {
    profile(kind).plan.iter().map(ToString::to_string).collect()
}

/// Mean of `scores` and whether it clears [`GO_THRESHOLD`].
///
/// An empty slice averages to `0.0` and is never a go.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn decide_go(scores: &[f64]) -> (f64, bool) {
    if scores.is_empty() {
        return (0.0, false);
    }
    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    (average, average > GO_THRESHOLD)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentResult {
    pub agent: AgentKind,
    pub name: &'static str,
    pub score: f64,
    pub plan: Vec<String>,
}

impl AgentResult {
    #[must_use]
    pub fn new(agent: AgentKind, score: f64, plan: Vec<String>) -> Self {
        Self {
            agent,
            name: agent.name(),
            score,
            plan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSection {
    pub agent: &'static str,
    pub plan: Vec<String>,
}

/// Agent name to plan, in consultation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkPlan {
    sections: Vec<PlanSection>,
}

impl WorkPlan {
    #[must_use]
    pub fn from_results(results: &[AgentResult]) -> Self {
        Self {
            sections: results
                .iter()
                .map(|r| PlanSection {
                    agent: r.name,
                    plan: r.plan.clone(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, agent: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.agent == agent)
            .map(|s| s.plan.as_slice())
    }

    #[must_use]
    pub fn sections(&self) -> &[PlanSection] {
        &self.sections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Everything one multi-agent analysis produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: String,
    pub average_score: f64,
    pub go: bool,
    pub agents: Vec<AgentResult>,
    pub work_plan: WorkPlan,
}

impl AnalysisReport {
    #[must_use]
    pub fn assemble(summary: String, agents: Vec<AgentResult>) -> Self {
        let scores: Vec<f64> = agents.iter().map(|a| a.score).collect();
        let (average_score, go) = decide_go(&scores);
        let work_plan = WorkPlan::from_results(&agents);
        Self {
            summary,
            average_score,
            go,
            agents,
            work_plan,
        }
    }
}

#[cfg(test)]
#[path = "agents_test.rs"]
mod tests;

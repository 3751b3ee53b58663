//! Command handlers. Each run is one sequential call chain; any failure
//! ends the command with a single error message.

use std::fmt::Write as _;

use mas_core::{AnalysisReport, ApiKey, AppConfig, Strategy, StrategyReport, MISSING_API_KEY_MESSAGE};
use mas_pipeline::Pipeline;

use crate::RunArgs;

/// Resolves the API key, printing the enter-a-key prompt when there is none.
fn resolve_key(args: &RunArgs) -> Option<ApiKey> {
    match ApiKey::from_optional(args.api_key.as_deref()) {
        Ok(key) => Some(key),
        Err(_) => {
            println!("{MISSING_API_KEY_MESSAGE}");
            None
        }
    }
}

/// Generates one strategy and prints it.
///
/// # Errors
///
/// Returns an error if the pipeline cannot be built or the run fails.
pub(crate) async fn run_strategy(
    config: &AppConfig,
    strategy: Strategy,
    args: &RunArgs,
) -> anyhow::Result<()> {
    let Some(api_key) = resolve_key(args) else {
        return Ok(());
    };
    tracing::debug!(url = %args.url, %strategy, model = %config.llm_model, "starting strategy run");

    let pipeline = Pipeline::from_app_config(config)?;
    let report = pipeline
        .run_strategy(api_key, &args.url, strategy)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_strategy_report(&report));
    }
    Ok(())
}

/// Runs the multi-agent analysis and prints the result.
///
/// # Errors
///
/// Returns an error if the pipeline cannot be built or the run fails.
pub(crate) async fn run_analysis(config: &AppConfig, args: &RunArgs) -> anyhow::Result<()> {
    let Some(api_key) = resolve_key(args) else {
        return Ok(());
    };
    tracing::debug!(url = %args.url, model = %config.llm_model, "starting analysis run");

    let pipeline = Pipeline::from_app_config(config)?;
    let report = pipeline
        .run_analysis(api_key, &args.url)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_analysis_report(&report));
    }
    Ok(())
}

pub(crate) fn list_strategies() {
    println!("{:<26}{:<32}TITLE", "SLUG", "AGENT");
    for strategy in Strategy::ALL {
        println!(
            "{:<26}{:<32}{}",
            strategy.slug(),
            strategy.label(),
            strategy.title()
        );
    }
}

pub(crate) fn format_strategy_report(report: &StrategyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## {}", report.title);
    out.push('\n');
    out.push_str(&report.content);
    if !report.content.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Summary, scores and decision; the work plan only on a go.
pub(crate) fn format_analysis_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## Brand Summary\n\n{}\n", report.summary.trim_end());

    let _ = writeln!(out, "## Agent Scores\n");
    for agent in &report.agents {
        let _ = writeln!(out, "{:<28}{:>4.1}", agent.name, agent.score);
    }
    let verdict = if report.go { "GO" } else { "NO-GO" };
    let _ = writeln!(out, "\nAverage score: {:.2} ({verdict})", report.average_score);

    if report.go {
        let _ = writeln!(out, "\n## Work Plan");
        for section in report.work_plan.sections() {
            let _ = writeln!(out, "\n### {}", section.agent);
            for step in &section.plan {
                let _ = writeln!(out, "- {step}");
            }
        }
    }
    out
}

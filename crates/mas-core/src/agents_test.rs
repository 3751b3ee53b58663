use super::*;

fn run_all(summary: &str) -> Vec<AgentResult> {
    AgentKind::ALL
        .into_iter()
        .map(|kind| AgentResult::new(kind, analyze(kind, summary), generate_plan(kind)))
        .collect()
}

#[test]
fn scores_are_the_fixed_literals() {
    let scores: Vec<f64> = AgentKind::ALL
        .into_iter()
        .map(|kind| analyze(kind, ""))
        .collect();
    assert_eq!(scores, vec![8.0, 7.0, 6.0, 9.0, 7.5]);
}

#[test]
fn every_plan_has_two_entries() {
    for kind in AgentKind::ALL {
        assert_eq!(generate_plan(kind).len(), 2, "{kind} plan length");
    }
}

#[test]
fn agents_ignore_the_brand_summary() {
    let a = run_all("Cann is a hemp-infused social tonic brand.");
    let b = run_all("");
    let c = run_all(&"x".repeat(10_000));
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn decision_is_always_go_with_current_constants() {
    for summary in ["", "bad brand, do not pursue", "great brand"] {
        let report = AnalysisReport::assemble(summary.to_string(), run_all(summary));
        assert!((report.average_score - 7.5).abs() < f64::EPSILON);
        assert!(report.go, "decision should not depend on {summary:?}");
    }
}

#[test]
fn decide_go_is_strictly_greater_than_threshold() {
    assert_eq!(decide_go(&[7.0, 7.0]), (7.0, false));
    assert_eq!(decide_go(&[7.0, 8.0]), (7.5, true));
    assert_eq!(decide_go(&[]), (0.0, false));
}

#[test]
fn work_plan_keeps_agent_order_and_lookup() {
    let report = AnalysisReport::assemble(String::new(), run_all(""));
    let names: Vec<&str> = report.work_plan.sections().iter().map(|s| s.agent).collect();
    assert_eq!(
        names,
        vec![
            "Brand Strategy",
            "Content Creation",
            "Paid Advertising",
            "SEO & Organic Growth",
            "Competitor Monitoring",
        ]
    );
    assert_eq!(
        report.work_plan.get("Paid Advertising"),
        Some(generate_plan(AgentKind::PaidAdvertising).as_slice())
    );
    assert!(report.work_plan.get("Unknown").is_none());
}

#[test]
fn report_serializes_work_plan_as_list() {
    let report = AnalysisReport::assemble("summary".to_string(), run_all("summary"));
    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(json["go"], serde_json::json!(true));
    assert_eq!(json["work_plan"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["agents"][0]["agent"], "brand_strategy");
}

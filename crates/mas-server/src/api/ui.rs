//! Static pages. Both are self-contained HTML that talk to the JSON API.

use axum::response::Html;

const STRATEGY_PAGE: &str = include_str!("../../assets/index.html");
const ANALYSIS_PAGE: &str = include_str!("../../assets/analysis.html");

pub(super) async fn strategy_page() -> Html<&'static str> {
    Html(STRATEGY_PAGE)
}

pub(super) async fn analysis_page() -> Html<&'static str> {
    Html(ANALYSIS_PAGE)
}

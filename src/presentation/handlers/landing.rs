use axum::response::Html;

/// Static landing page embedded at compile time.
pub async fn landing_handler() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

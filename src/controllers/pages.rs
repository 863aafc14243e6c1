use axum::response::Html;

/// GET / - the text-to-speech form
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

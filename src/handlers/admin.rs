// src/handlers/admin.rs
use axum::response::Html;

// GET / - The admin panel page; everything it does goes through /api.
pub async fn admin_page() -> Html<&'static str> {
    Html(include_str!("../../assets/admin.html"))
}

pub async fn health_check() -> &'static str {
    "OK"
}

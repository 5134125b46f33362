use axum::response::Html;

use crate::render;

pub async fn home() -> Html<&'static str> {
    Html(render::landing_page())
}

//! Story server: browse, render and submit chat stories over HTTP.

use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::error::Result;
use crate::ui::form::FormData;
use crate::ui::markup::{Element, Markup};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/stories/{id}", get(story_handler))
        .route("/stories/{id}/args", get(story_args_handler))
        .route("/stories/{id}/submit", post(story_submit_handler))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout_duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided state.
pub async fn start_server(state: AppState) -> Result<()> {
    let addr = state.config.server.address();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Generate the HTML shell for a page.
fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Chat Stories</title>
    <script src="https://unpkg.com/htmx.org@2.0.8"></script>
</head>
<body class="min-h-screen bg-background text-textPrimary antialiased">
    <main id="app" class="container mx-auto px-4 py-6 max-w-3xl">
        {content}
    </main>
</body>
</html>"#,
        title = crate::ui::markup::escape(title),
    )
}

/// Enclose a rendered story so that form submissions bubbling out of it are
/// posted to `action` instead of navigating.
fn story_canvas(action: &str, content: Markup) -> Markup {
    Element::new("div")
        .attr("id", "story-canvas")
        .attr("class", "rounded-lg border border-panelBorder p-4")
        .attr("hx-post", action)
        .attr("hx-trigger", "submit")
        .attr("hx-include", "find form")
        .attr("hx-swap", "none")
        .attr("hx-on:submit", "event.preventDefault()")
        .child(content)
        .into()
}

fn story_nav(state: &AppState) -> Markup {
    Element::new("nav")
        .attr("class", "flex gap-4 mb-6")
        .children(state.catalog.stories().iter().map(|story| {
            Markup::from(
                Element::new("a")
                    .attr("href", format!("/stories/{}", story.id()))
                    .child(story.name()),
            )
        }))
        .into()
}

/// GET / - story index.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let content = Markup::Fragment(vec![
        Markup::from(
            Element::new("h1")
                .attr("class", "text-2xl font-bold mb-4")
                .child(state.catalog.title()),
        ),
        story_nav(&state),
    ]);
    Html(html_shell(state.catalog.title(), &content.to_html()))
}

/// GET /stories/{id} - rendered story with its controls.
async fn story_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let story = state.catalog.get(&id)?;
    let rendered = state.catalog.render(&id)?;
    let controls = serde_json::to_string_pretty(&state.catalog.controls(&id)?)?;

    let content = Markup::Fragment(vec![
        story_nav(&state),
        Markup::from(
            Element::new("h1")
                .attr("class", "text-2xl font-bold mb-4")
                .child(format!("{} / {}", state.catalog.title(), story.name())),
        ),
        story_canvas(&format!("/stories/{id}/submit"), rendered),
        Markup::from(
            Element::new("pre")
                .attr("id", "story-controls")
                .attr("class", "mt-6 text-xs")
                .child(controls),
        ),
    ]);

    Ok(Html(html_shell(story.name(), &content.to_html())))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /health - liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}

/// GET /stories/{id}/args - serializable story args.
async fn story_args_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.catalog.controls(&id)?))
}

/// POST /stories/{id}/submit - replay a form post through the rendered story.
async fn story_submit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<StatusCode> {
    let data: FormData = fields.into_iter().collect();
    info!(
        name: "story.submit",
        story = %id,
        fields = data.len(),
        "Story form submitted"
    );
    state.catalog.submit(&id, &data)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_canvas_attributes() {
        let html = story_canvas("/stories/x/submit", "body".into()).to_html();
        assert!(html.contains(r#"hx-post="/stories/x/submit""#));
        assert!(html.contains(r#"hx-trigger="submit""#));
        assert!(html.contains(r#"hx-on:submit="event.preventDefault()""#));
        assert!(html.ends_with(">body</div>"));
    }

    #[test]
    fn test_html_shell_escapes_title() {
        let page = html_shell("<b>", "content");
        assert!(page.contains("<title>&lt;b&gt; - Chat Stories</title>"));
        assert!(page.contains("content"));
    }
}

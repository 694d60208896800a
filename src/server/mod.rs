//! HTTP server - the site's read-only JSON surface

mod error;

pub use error::ApiError;

use anyhow::Result;
use axum::{
    extract::{Path as UrlPath, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::{self, notes, FrontMatter, MarkdownRenderer, PostsGroup};
use crate::cv::{create_resume, ResumeVariant};
use crate::gist::{GistClient, GistError};
use crate::theme::{FilePreferences, Theme, ThemeStore};
use crate::Folio;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    folio: Arc<Folio>,
    renderer: Arc<MarkdownRenderer>,
    theme: Arc<ThemeStore>,
    gist: Arc<GistClient>,
}

impl AppState {
    /// Build state from a site, with theme preferences persisted under the
    /// base directory
    pub fn new(folio: Folio) -> Self {
        let renderer = MarkdownRenderer::with_theme(&folio.config.highlight.theme);
        let prefs = FilePreferences::new(folio.base_dir.join(".folio").join("preferences.json"));
        let theme = ThemeStore::new(Box::new(prefs));
        let gist = GistClient::new(&folio.config.gist);

        Self {
            folio: Arc::new(folio),
            renderer: Arc::new(renderer),
            theme: Arc::new(theme),
            gist: Arc::new(gist),
        }
    }

    /// Replace the theme store (used to inject a non-persistent store)
    pub fn with_theme_store(mut self, theme: ThemeStore) -> Self {
        self.theme = Arc::new(theme);
        self
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.folio.base_dir.join("static");

    Router::new()
        .route("/api/posts", get(api_posts))
        .route("/api/posts/published", get(api_posts_published))
        .route("/api/notes", get(api_notes))
        .route("/api/gist", get(api_gist))
        .route("/api/resume/:variant", get(api_resume))
        .route("/api/theme", get(api_theme).put(api_theme_set))
        .route("/api/theme/toggle", post(api_theme_toggle))
        .route("/posts/:slug", get(post_page))
        .route("/archive/:slug", get(archive_page))
        .route("/notes/:slug", get(note_page))
        .nest_service("/assets", ServeDir::new(static_dir))
        .with_state(state)
}

/// Start the server
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let state = AppState::new(folio.clone());
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn posts_for(state: &AppState, selection: PostsGroup) -> Result<Vec<content::Post>, ApiError> {
    let source = content::FsContentSource::from_site(&state.folio);
    content::collect_posts(&source, selection).map_err(ApiError::Internal)
}

/// All published and archived posts
async fn api_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let posts = posts_for(&state, PostsGroup::PUBLISHED | PostsGroup::ARCHIVED)?;
    Ok(Json(posts))
}

/// Published posts only
async fn api_posts_published(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let posts = posts_for(&state, PostsGroup::PUBLISHED)?;
    Ok(Json(posts))
}

#[derive(Serialize)]
struct NotesListing {
    slugs: Vec<String>,
    names: Vec<String>,
}

/// Notes listing: slugs and their display names
async fn api_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let listed = notes::list_notes(&state.folio.notes_dir).map_err(ApiError::Internal)?;
    let (slugs, names) = listed.into_iter().map(|n| (n.slug, n.name)).unzip();
    Ok(Json(NotesListing { slugs, names }))
}

#[derive(Deserialize)]
struct GistQuery {
    id: Option<String>,
}

/// Proxy a single gist, returning its first file
async fn api_gist(
    State(state): State<AppState>,
    Query(query): Query<GistQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing gist id".to_string()))?;

    let file = state.gist.first_file(&id).await.map_err(|e| match e {
        GistError::NotFound(_) | GistError::Empty(_) => {
            ApiError::NotFound(format!("cannot fetch gist {}", id))
        }
        GistError::Http(_) | GistError::Status(_) => {
            tracing::warn!("Gist fetch failed: {}", e);
            ApiError::NotFound(format!("cannot fetch gist {}", id))
        }
    })?;

    Ok(Json(file))
}

/// A résumé variant as JSON
async fn api_resume(
    UrlPath(variant): UrlPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let variant: ResumeVariant = variant
        .parse()
        .map_err(|e: crate::cv::ResumeError| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(create_resume(variant)))
}

#[derive(Serialize)]
struct ThemeBody {
    theme: Theme,
}

#[derive(Deserialize)]
struct ThemeUpdate {
    theme: String,
}

/// Current theme preference
async fn api_theme(State(state): State<AppState>) -> impl IntoResponse {
    Json(ThemeBody {
        theme: state.theme.get(),
    })
}

/// Set the theme preference; unknown values are ignored
async fn api_theme_set(
    State(state): State<AppState>,
    Json(update): Json<ThemeUpdate>,
) -> impl IntoResponse {
    state.theme.set_str(&update.theme);
    Json(ThemeBody {
        theme: state.theme.get(),
    })
}

/// Advance the theme preference to the next value
async fn api_theme_toggle(State(state): State<AppState>) -> impl IntoResponse {
    Json(ThemeBody {
        theme: state.theme.toggle(),
    })
}

#[derive(Serialize)]
struct PageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    meta: FrontMatter,
    content: String,
}

fn load_page(
    state: &AppState,
    dir: &Path,
    slug: &str,
    title: Option<String>,
) -> Result<Json<PageData>, ApiError> {
    let entry = match content::load_slug(dir, slug) {
        Ok(Some(entry)) => entry,
        Ok(None) => return Err(ApiError::NotFound(format!("Not found: {}", slug))),
        Err(e) => {
            tracing::warn!("Failed to load entry {:?}: {}", slug, e);
            return Err(ApiError::NotFound(format!("Not found: {}", slug)));
        }
    };

    let content = state
        .renderer
        .render(&entry.body)
        .map_err(ApiError::Internal)?;

    Ok(Json(PageData {
        title,
        meta: entry.matter,
        content,
    }))
}

/// Page data for a published post
async fn post_page(
    State(state): State<AppState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    load_page(&state, &state.folio.posts_dir, &slug, None)
}

/// Page data for an archived post
async fn archive_page(
    State(state): State<AppState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    load_page(&state, &state.folio.archive_dir, &slug, None)
}

/// Page data for a note; the title is derived from the slug
async fn note_page(
    State(state): State<AppState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let title = notes::display_name(&slug);
    load_page(&state, &state.folio.notes_dir, &slug, Some(title))
}

//! HTTP transport: shared state, router and request handlers.
//!
//! Handlers delegate to the `libris-core` catalog behind a read-write lock
//! and render server-side HTML. Both mutating routes redirect back to their
//! form page with the outcome carried in the `msg` query parameter, so a
//! page refresh never resubmits the form.

pub mod views;

use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use libris_core::models::{Book, CreateBookInput};
use libris_core::store::{IdAllocator, Library};

/// Shared application state
pub struct AppState {
    pub ids: IdAllocator,
    pub library: RwLock<Library>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            library: RwLock::new(Library::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages
        .route("/", get(home))
        .route("/about", get(about))
        // Catalog endpoints
        .route("/books", get(list_books))
        .route("/books/add", get(add_book_form))
        .route("/books/add", post(add_book))
        .route("/books/remove", get(remove_book_form))
        .route("/books/remove", post(remove_book))
        // Search endpoints
        .route("/search", get(search_home))
        .route("/search/name", get(search_by_name))
        .route("/search/author", get(search_by_author))
        .fallback(not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Flash message passed back to a form page after a redirect
#[derive(Debug, Deserialize)]
pub struct FlashParams {
    msg: Option<String>,
}

/// Form payload naming the book to remove
#[derive(Debug, Deserialize)]
pub struct RemoveBookForm {
    name: String,
}

/// Query parameters for search by name
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    name: String,
}

/// Query parameters for search by author
#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    #[serde(default)]
    author: String,
}

async fn home() -> Html<String> {
    Html(views::home())
}

async fn about() -> Html<String> {
    Html(views::about())
}

/// Full catalog in insertion order
async fn list_books(State(state): State<Arc<AppState>>) -> Html<String> {
    let library = state.library.read().await;
    Html(views::book_list(&library.list_all_books()))
}

async fn add_book_form(Query(params): Query<FlashParams>) -> Html<String> {
    Html(views::add_book_form(params.msg.as_deref()))
}

/// Construct the book and append it to the catalog
async fn add_book(
    State(state): State<Arc<AppState>>,
    Form(input): Form<CreateBookInput>,
) -> Redirect {
    let book = Book::new(&state.ids, &input.year, &input.name, &input.author);
    tracing::debug!("Adding book {} (id {})", book.name, book.id);

    state.library.write().await.add_book(book);

    redirect_with_msg("/books/add", "Book added successfully")
}

async fn remove_book_form(Query(params): Query<FlashParams>) -> Html<String> {
    Html(views::remove_book_form(params.msg.as_deref()))
}

/// Remove every book matching the submitted name exactly
async fn remove_book(
    State(state): State<Arc<AppState>>,
    Form(input): Form<RemoveBookForm>,
) -> Redirect {
    let removed = state.library.write().await.remove_book(&input.name);
    tracing::debug!("Remove request for {}: removed={}", input.name, removed);

    let msg = if removed {
        "Book removed successfully"
    } else {
        "Book not found"
    };
    redirect_with_msg("/books/remove", msg)
}

async fn search_home() -> Html<String> {
    Html(views::search_home())
}

async fn search_by_name(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> Html<String> {
    let matches = state.library.read().await.search_by_name(&query.name);
    Html(views::search_results("name", &query.name, &matches))
}

async fn search_by_author(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AuthorQuery>,
) -> Html<String> {
    let matches = state.library.read().await.search_by_author(&query.author);
    Html(views::search_results("author", &query.author, &matches))
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::not_found()))
}

fn redirect_with_msg(path: &str, msg: &str) -> Redirect {
    Redirect::to(&format!("{}?msg={}", path, urlencoding::encode(msg)))
}

//! # ql-api Handlers
//!
//! This module coordinates the flow between HTTP requests and Core traits.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use ql_core::error::AppError;
use ql_core::models::{ArticleId, Comment, CommentDraft, CommentId, LikeState, Viewer};
use ql_core::traits::{CommentRepo, ViewerResolver};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// State shared across all Actix-web workers.
pub struct AppState {
    pub repo: Box<dyn CommentRepo>,
    pub auth: Box<dyn ViewerResolver>,
    pub ping_message: String,
}

type ApiResult = Result<HttpResponse, ApiError>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    /// Missing content is reported like empty content, not as a JSON error.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<CommentId>,
}

#[derive(Debug, Serialize)]
struct CommentListResponse {
    comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
struct CreateCommentResponse {
    comment: Comment,
    message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeResponse {
    #[serde(flatten)]
    state: LikeState,
    message: &'static str,
}

impl From<LikeState> for LikeResponse {
    fn from(state: LikeState) -> Self {
        let message = if state.is_liked { "Comment liked!" } else { "Comment unliked!" };
        Self { state, message }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentCountResponse {
    article_id: ArticleId,
    total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticleOpenedResponse {
    article_id: ArticleId,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct PingResponse<'a> {
    message: &'a str,
}

/// Works out who is asking. No header means the guest reader.
fn resolve_viewer(data: &AppState, req: &HttpRequest) -> Result<Viewer, ApiError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str())
        .transpose()
        .map_err(|_| AppError::Unauthorized("authorization header is not valid text".to_string()))?;

    Ok(data.auth.resolve(authorization)?)
}

/// GET /api/ping
pub async fn ping(data: web::Data<AppState>, req: HttpRequest) -> ApiResult {
    resolve_viewer(&data, &req)?;
    Ok(HttpResponse::Ok().json(PingResponse { message: &data.ping_message }))
}

/// PUT /api/articles/{article_id}
///
/// Called when the blog side publishes an article, so it can take comments.
/// Opening an article twice keeps its discussion.
pub async fn open_article(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<ArticleId>,
) -> ApiResult {
    let viewer = resolve_viewer(&data, &req)?;
    let article_id = path.into_inner();

    data.repo.open_article(article_id).await?;
    log::info!("viewer {} opened article {} for comments", viewer.id, article_id);

    Ok(HttpResponse::Ok().json(ArticleOpenedResponse {
        article_id,
        message: "Article open for comments",
    }))
}

/// GET /api/articles/{article_id}/comments
pub async fn list_comments(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<ArticleId>,
) -> ApiResult {
    let viewer = resolve_viewer(&data, &req)?;
    let article_id = path.into_inner();

    let comments = data.repo.list_comments(article_id, viewer.id).await?;
    Ok(HttpResponse::Ok().json(CommentListResponse { comments }))
}

/// POST /api/articles/{article_id}/comments
///
/// Top-level when `parentId` is absent, otherwise a reply at any depth.
pub async fn add_comment(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<ArticleId>,
    body: web::Json<CreateCommentRequest>,
) -> ApiResult {
    // 1. Identity: the viewer becomes the author
    let viewer = resolve_viewer(&data, &req)?;
    let article_id = path.into_inner();
    let CreateCommentRequest { content, parent_id } = body.into_inner();

    // 2. Persistence: the store validates and attaches it
    let comment = data
        .repo
        .add_comment(article_id, viewer.profile, CommentDraft { content, parent_id })
        .await?;

    log::info!(
        "viewer {} added comment {} to article {}",
        viewer.id,
        comment.id,
        article_id
    );

    Ok(HttpResponse::Created().json(CreateCommentResponse {
        comment,
        message: "Comment added successfully!",
    }))
}

/// PUT /api/comments/{comment_id}/like
///
/// Searches every article. Prefer the article-scoped route below.
pub async fn toggle_comment_like(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<CommentId>,
) -> ApiResult {
    let viewer = resolve_viewer(&data, &req)?;
    let state = data.repo.toggle_comment_like(path.into_inner(), viewer.id).await?;
    Ok(HttpResponse::Ok().json(LikeResponse::from(state)))
}

/// PUT /api/articles/{article_id}/comments/{comment_id}/like
pub async fn toggle_article_comment_like(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(ArticleId, CommentId)>,
) -> ApiResult {
    let viewer = resolve_viewer(&data, &req)?;
    let (article_id, comment_id) = path.into_inner();

    let state = data
        .repo
        .toggle_article_comment_like(article_id, comment_id, viewer.id)
        .await?;
    Ok(HttpResponse::Ok().json(LikeResponse::from(state)))
}

/// GET /api/articles/{article_id}/comments/count
pub async fn count_comments(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<ArticleId>,
) -> ApiResult {
    resolve_viewer(&data, &req)?;
    let article_id = path.into_inner();
    let total = data.repo.count_comments(article_id).await?;
    Ok(HttpResponse::Ok().json(CommentCountResponse { article_id, total }))
}

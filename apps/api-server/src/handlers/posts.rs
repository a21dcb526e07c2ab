//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_shared::dto::{CreatePostRequest, PostListResponse, PostView, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// List every post in the store.
///
/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.store.find_all().await?;
    let posts: Vec<PostView> = posts.into_iter().map(PostView::from).collect();

    Ok(HttpResponse::Ok().json(PostListResponse { posts }))
}

/// Create a post and return its external view.
///
/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    req.validate()
        .map_err(|msg| AppError::Validation(msg.to_string()))?;

    let post = state.store.insert(req.into_new_post()).await?;
    tracing::debug!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(PostView::from(post)))
}

/// Overwrite the mutable fields of a post.
///
/// PUT /posts/{id}
///
/// Unknown ids are acknowledged with 204 as well; the store reports
/// whether a record was actually touched.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    // Validate input
    req.validate()
        .map_err(|msg| AppError::Validation(msg.to_string()))?;

    let updated = state.store.update_fields(id, req.into_patch()).await?;
    if !updated {
        tracing::debug!(post_id = %id, "Update targeted an unknown post id");
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Remove a post.
///
/// DELETE /posts/{id}
///
/// Lenient like update: deleting an absent id still answers 204.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let removed = state.store.delete_by_id(id).await?;
    if !removed {
        tracing::debug!(post_id = %id, "Delete targeted an unknown post id");
    }

    Ok(HttpResponse::NoContent().finish())
}

use std::sync::Arc;

use actix_web::{get, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::UpdateProfileRequest,
};

#[get("/students/me")]
pub async fn get_profile(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.student_service.get_profile(&auth.0).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[put("/students/me")]
pub async fn update_profile(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .student_service
        .update_profile(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

// Authentication is the only gate here; the admin listing has never required
// the admin role.
#[get("/students/admins")]
pub async fn list_admins(
    state: web::Data<Arc<AppState>>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let admins = state.student_service.list_admins().await?;
    Ok(HttpResponse::Ok().json(admins))
}

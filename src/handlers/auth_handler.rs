use std::sync::Arc;

use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{LoginRequest, SignupRequest},
};

#[post("/api/students/signup")]
pub async fn signup(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let student = state.student_service.signup(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(student))
}

#[post("/api/students/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.student_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/students/create-admin")]
pub async fn create_admin(
    state: web::Data<Arc<AppState>>,
    req: HttpRequest,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let provided_secret = req
        .headers()
        .get("X-Admin-Secret")
        .and_then(|h| h.to_str().ok());

    let admin = state
        .student_service
        .create_admin(provided_secret, request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(admin))
}

use std::sync::Arc;

use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminOnly, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{ApplyAdmissionRequest, UpdateAdmissionStatusRequest},
};

#[post("/admissions")]
pub async fn apply_admission(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    request: web::Json<ApplyAdmissionRequest>,
) -> Result<HttpResponse, AppError> {
    let admission = state
        .admission_service
        .apply(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(admission))
}

#[get("/admissions")]
pub async fn list_admissions(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let admissions = state.admission_service.list_own(&auth.0).await?;
    Ok(HttpResponse::Ok().json(admissions))
}

#[get("/admissions/{id}")]
pub async fn get_admission(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let admission = state.admission_service.get(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(admission))
}

#[put("/admissions/{id}")]
pub async fn update_admission_status(
    state: web::Data<Arc<AppState>>,
    _admin: AdminOnly,
    id: web::Path<String>,
    request: web::Json<UpdateAdmissionStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .admission_service
        .update_status(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminOnly, AuthenticatedUser},
    errors::AppError,
    models::dto::request::CourseRequest,
};

#[post("/courses")]
pub async fn create_course(
    state: web::Data<Arc<AppState>>,
    _admin: AdminOnly,
    request: web::Json<CourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(course))
}

#[get("/courses")]
pub async fn list_courses(
    state: web::Data<Arc<AppState>>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.list().await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<Arc<AppState>>,
    _auth: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get(&id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[put("/courses/{id}")]
pub async fn update_course(
    state: web::Data<Arc<AppState>>,
    _admin: AdminOnly,
    id: web::Path<String>,
    request: web::Json<CourseRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .course_service
        .update(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/courses/{id}")]
pub async fn delete_course(
    state: web::Data<Arc<AppState>>,
    _admin: AdminOnly,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.course_service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

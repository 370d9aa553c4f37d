use actix_web::web;

use crate::{
    auth::AuthMiddleware,
    handlers::{admission_handler, auth_handler, course_handler, health_check, student_handler},
};

/// Wires every route. Signup, login, admin-creation and the health probe are
/// public; everything under `/api` runs behind `AuthMiddleware`, with
/// admin-only routes additionally gated by the `AdminOnly` extractor in their
/// handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(auth_handler::signup)
        .service(auth_handler::login)
        .service(auth_handler::create_admin)
        .service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                // Student routes
                .service(student_handler::get_profile)
                .service(student_handler::update_profile)
                .service(student_handler::list_admins)
                // Course routes
                .service(course_handler::create_course)
                .service(course_handler::list_courses)
                .service(course_handler::get_course)
                .service(course_handler::update_course)
                .service(course_handler::delete_course)
                // Admission routes
                .service(admission_handler::apply_admission)
                .service(admission_handler::list_admissions)
                .service(admission_handler::get_admission)
                .service(admission_handler::update_admission_status),
        );
}

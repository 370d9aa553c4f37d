use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAdmissionRepository, MongoCourseRepository, MongoStudentRepository, StudentRepository,
    },
    services::{AdmissionService, CourseService, StudentService},
};

#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<StudentService>,
    pub course_service: Arc<CourseService>,
    pub admission_service: Arc<AdmissionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config, jwt_service: JwtService) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let student_repository = Arc::new(MongoStudentRepository::new(&db));
        student_repository.ensure_indexes().await?;
        let student_service = Arc::new(StudentService::new(
            student_repository,
            jwt_service,
            config.admin_secret.clone(),
        ));

        let course_repository = Arc::new(MongoCourseRepository::new(&db));
        let course_service = Arc::new(CourseService::new(course_repository));

        let admission_repository = Arc::new(MongoAdmissionRepository::new(&db));
        let admission_service = Arc::new(AdmissionService::new(admission_repository));

        Ok(Self {
            student_service,
            course_service,
            admission_service,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}

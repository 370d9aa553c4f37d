use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::parse_object_id,
    errors::{AppError, AppResult},
    models::{
        domain::{Course, CourseUpdate},
        dto::{
            request::CourseRequest,
            response::{CourseDto, MessageResponse},
        },
    },
    repositories::CourseRepository,
};

pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CourseRequest) -> AppResult<CourseDto> {
        request.validate()?;

        let course = Course::from_request(request);
        let course = self.repository.create(course).await?;
        Ok(course.into())
    }

    pub async fn list(&self) -> AppResult<Vec<CourseDto>> {
        let courses = self.repository.find_all().await?;
        Ok(courses.into_iter().map(CourseDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<CourseDto> {
        let id = parse_object_id(id, "course")?;

        let course = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        Ok(course.into())
    }

    pub async fn update(&self, id: &str, request: CourseRequest) -> AppResult<MessageResponse> {
        request.validate()?;
        let id = parse_object_id(id, "course")?;

        self.repository.update(id, CourseUpdate::from(request)).await?;
        Ok(MessageResponse::new("Course updated successfully"))
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        let id = parse_object_id(id, "course")?;

        self.repository.delete(id).await?;
        Ok(MessageResponse::new("Course deleted successfully"))
    }
}

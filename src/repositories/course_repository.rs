use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Course, CourseUpdate},
};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: Course) -> AppResult<Course>;
    async fn find_all(&self) -> AppResult<Vec<Course>>;
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Course>>;
    async fn update(&self, id: ObjectId, update: CourseUpdate) -> AppResult<()>;
    async fn delete(&self, id: ObjectId) -> AppResult<()>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("courses");
        Self { collection }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn create(&self, mut course: Course) -> AppResult<Course> {
        let result = self.collection.insert_one(&course).await?;
        course.id = result.inserted_id.as_object_id();
        Ok(course)
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let cursor = self.collection.find(doc! {}).await?;
        let courses: Vec<Course> = cursor.try_collect().await?;
        Ok(courses)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Course>> {
        let course = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(course)
    }

    async fn update(&self, id: ObjectId, update: CourseUpdate) -> AppResult<()> {
        let update_doc = update.into_update_document()?;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update_doc)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        Ok(())
    }
}

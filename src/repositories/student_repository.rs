use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Student, StudentProfileUpdate},
};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, student: Student) -> AppResult<Student>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>>;
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Student>>;
    async fn update_profile(&self, id: ObjectId, update: StudentProfileUpdate) -> AppResult<()>;
    async fn find_admins(&self) -> AppResult<Vec<Student>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoStudentRepository {
    collection: Collection<Student>,
}

impl MongoStudentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("students");
        Self { collection }
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn create(&self, mut student: Student) -> AppResult<Student> {
        let result = self.collection.insert_one(&student).await?;
        student.id = result.inserted_id.as_object_id();
        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let student = self.collection.find_one(doc! { "email": email }).await?;
        Ok(student)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Student>> {
        let student = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(student)
    }

    async fn update_profile(&self, id: ObjectId, update: StudentProfileUpdate) -> AppResult<()> {
        let update_doc = update.into_update_document()?;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update_doc)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        Ok(())
    }

    async fn find_admins(&self) -> AppResult<Vec<Student>> {
        let cursor = self.collection.find(doc! { "role": "admin" }).await?;
        let admins: Vec<Student> = cursor.try_collect().await?;
        Ok(admins)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on students.email");

        Ok(())
    }
}

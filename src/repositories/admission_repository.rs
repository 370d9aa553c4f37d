use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    auth::policy::owned_admission_filter,
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Admission, AdmissionStatusUpdate},
};

#[async_trait]
pub trait AdmissionRepository: Send + Sync {
    async fn create(&self, admission: Admission) -> AppResult<Admission>;
    async fn find_by_student(&self, student_id: ObjectId) -> AppResult<Vec<Admission>>;

    /// Looks a record up through the ownership filter; a record owned by
    /// another student is indistinguishable from a missing one.
    async fn find_owned(
        &self,
        id: ObjectId,
        student_id: ObjectId,
    ) -> AppResult<Option<Admission>>;

    async fn update_status(&self, id: ObjectId, update: AdmissionStatusUpdate) -> AppResult<()>;
}

pub struct MongoAdmissionRepository {
    collection: Collection<Admission>,
}

impl MongoAdmissionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("admissions");
        Self { collection }
    }
}

#[async_trait]
impl AdmissionRepository for MongoAdmissionRepository {
    async fn create(&self, mut admission: Admission) -> AppResult<Admission> {
        let result = self.collection.insert_one(&admission).await?;
        admission.id = result.inserted_id.as_object_id();
        Ok(admission)
    }

    async fn find_by_student(&self, student_id: ObjectId) -> AppResult<Vec<Admission>> {
        let cursor = self
            .collection
            .find(doc! { "studentId": student_id })
            .await?;
        let admissions: Vec<Admission> = cursor.try_collect().await?;
        Ok(admissions)
    }

    async fn find_owned(
        &self,
        id: ObjectId,
        student_id: ObjectId,
    ) -> AppResult<Option<Admission>> {
        let admission = self
            .collection
            .find_one(owned_admission_filter(id, student_id))
            .await?;
        Ok(admission)
    }

    async fn update_status(&self, id: ObjectId, update: AdmissionStatusUpdate) -> AppResult<()> {
        let update_doc = update.into_update_document()?;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update_doc)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Admission not found".to_string()));
        }

        Ok(())
    }
}

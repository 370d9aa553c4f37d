use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{caller_id, parse_object_id, Claims},
    errors::{AppError, AppResult},
    models::{
        domain::{Admission, AdmissionStatus, AdmissionStatusUpdate},
        dto::{
            request::{ApplyAdmissionRequest, UpdateAdmissionStatusRequest},
            response::{AdmissionDto, MessageResponse},
        },
    },
    repositories::AdmissionRepository,
};

pub struct AdmissionService {
    repository: Arc<dyn AdmissionRepository>,
}

impl AdmissionService {
    pub fn new(repository: Arc<dyn AdmissionRepository>) -> Self {
        Self { repository }
    }

    /// Submits an application. The owner is always the verified caller; the
    /// request body cannot set it.
    pub async fn apply(
        &self,
        claims: &Claims,
        request: ApplyAdmissionRequest,
    ) -> AppResult<AdmissionDto> {
        request.validate()?;

        let student_id = caller_id(claims)?;
        let course_id = parse_object_id(&request.course_id, "course")?;

        let admission = Admission::new(
            student_id,
            course_id,
            request.personal_details,
            request.academic_details,
            request.documents,
        );

        let admission = self.repository.create(admission).await?;
        Ok(admission.into())
    }

    /// Lists the caller's own applications.
    pub async fn list_own(&self, claims: &Claims) -> AppResult<Vec<AdmissionDto>> {
        let student_id = caller_id(claims)?;

        let admissions = self.repository.find_by_student(student_id).await?;
        Ok(admissions.into_iter().map(AdmissionDto::from).collect())
    }

    /// Reads a single application through the ownership filter. This applies
    /// to every caller, admins included: a record belonging to someone else
    /// is `NotFound`.
    pub async fn get(&self, claims: &Claims, id: &str) -> AppResult<AdmissionDto> {
        let admission_id = parse_object_id(id, "admission")?;
        let student_id = caller_id(claims)?;

        let admission = self
            .repository
            .find_owned(admission_id, student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Admission not found".to_string()))?;

        Ok(admission.into())
    }

    /// Admin review. The status string is checked against the enum before any
    /// persistence call, so an out-of-range value mutates nothing.
    pub async fn update_status(
        &self,
        id: &str,
        request: UpdateAdmissionStatusRequest,
    ) -> AppResult<MessageResponse> {
        let admission_id = parse_object_id(id, "admission")?;
        let status: AdmissionStatus = request.status.parse()?;

        let update = AdmissionStatusUpdate {
            status,
            comments: request.comments.clone(),
        };

        self.repository.update_status(admission_id, update).await?;

        log::info!(
            "Notification: Admission status updated. AdmissionID: {}, NewStatus: {}, Comments: {}",
            id,
            status,
            request.comments
        );

        Ok(MessageResponse::new("Admission status updated successfully"))
    }
}

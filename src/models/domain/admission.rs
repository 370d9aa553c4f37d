use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl FromStr for AdmissionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AdmissionStatus::Pending),
            "approved" => Ok(AdmissionStatus::Approved),
            "rejected" => Ok(AdmissionStatus::Rejected),
            other => Err(AppError::ValidationError(format!(
                "Invalid admission status '{}': must be one of pending, approved, rejected",
                other
            ))),
        }
    }
}

impl fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdmissionStatus::Pending => "pending",
            AdmissionStatus::Approved => "approved",
            AdmissionStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub address: super::student::Address,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicDetails {
    #[serde(rename = "highestQualification", default)]
    pub highest_qualification: String,
    #[serde(default)]
    pub institution: String,
    #[serde(rename = "yearOfCompletion", default)]
    pub year_of_completion: i32,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Documents {
    #[serde(default)]
    pub photo: String,
    #[serde(rename = "idProof", default)]
    pub id_proof: String,
    #[serde(rename = "addressProof", default)]
    pub address_proof: String,
    #[serde(rename = "qualificationCertificates", default)]
    pub qualification_certificates: Vec<String>,
}

/// An admission application. `student_id` is set from the verified caller at
/// creation and never appears in any update document afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Admission {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "studentId")]
    pub student_id: ObjectId,
    #[serde(rename = "courseId")]
    pub course_id: ObjectId,
    #[serde(rename = "personalDetails", default)]
    pub personal_details: PersonalDetails,
    #[serde(rename = "academicDetails", default)]
    pub academic_details: AcademicDetails,
    #[serde(default)]
    pub documents: Documents,
    pub status: AdmissionStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comments: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Admission {
    /// A fresh application always starts out pending.
    pub fn new(
        student_id: ObjectId,
        course_id: ObjectId,
        personal_details: PersonalDetails,
        academic_details: AcademicDetails,
        documents: Documents,
    ) -> Self {
        let now = Utc::now();

        Admission {
            id: None,
            student_id,
            course_id,
            personal_details,
            academic_details,
            documents,
            status: AdmissionStatus::Pending,
            comments: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Status review by an admin. The only fields an admin can touch are the
/// status, the comments and the update timestamp.
#[derive(Clone, Debug)]
pub struct AdmissionStatusUpdate {
    pub status: AdmissionStatus,
    pub comments: String,
}

impl AdmissionStatusUpdate {
    pub fn into_update_document(self) -> AppResult<Document> {
        Ok(doc! {
            "$set": {
                "status": mongodb::bson::to_bson(&self.status)?,
                "comments": self.comments,
                "updatedAt": mongodb::bson::to_bson(&Utc::now())?,
            }
        })
    }
}

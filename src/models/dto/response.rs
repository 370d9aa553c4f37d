use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::admission::{
    AcademicDetails, Admission, AdmissionStatus, Documents, PersonalDetails,
};
use crate::models::domain::course::{Course, EligibilityCriteria, Fees};
use crate::models::domain::student::{Address, Role, Student};

/// Client-facing view of a student. There is deliberately no password field
/// here: the hash can never leak through this type.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub gender: String,
    pub address: Address,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        StudentDto {
            id: student.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            email: student.email,
            name: student.name,
            phone: student.phone,
            date_of_birth: student.date_of_birth,
            gender: student.gender,
            address: student.address,
            role: student.role,
            created_at: student.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub seats: i32,
    #[serde(rename = "eligibilityCriteria")]
    pub eligibility_criteria: EligibilityCriteria,
    pub fees: Fees,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        CourseDto {
            id: course.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: course.name,
            description: course.description,
            duration: course.duration,
            seats: course.seats,
            eligibility_criteria: course.eligibility_criteria,
            fees: course.fees,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdmissionDto {
    pub id: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "personalDetails")]
    pub personal_details: PersonalDetails,
    #[serde(rename = "academicDetails")]
    pub academic_details: AcademicDetails,
    pub documents: Documents,
    pub status: AdmissionStatus,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Admission> for AdmissionDto {
    fn from(admission: Admission) -> Self {
        AdmissionDto {
            id: admission.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            student_id: admission.student_id.to_hex(),
            course_id: admission.course_id.to_hex(),
            personal_details: admission.personal_details,
            academic_details: admission.academic_details,
            documents: admission.documents,
            status: admission.status,
            comments: admission.comments,
            created_at: admission.created_at,
            updated_at: admission.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn test_student_dto_excludes_password() {
        let mut student = Student::test_student("jane@example.com", Role::Student);
        student.id = Some(ObjectId::new());

        let dto: StudentDto = student.into();
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["role"], "student");
    }

    #[test]
    fn test_admission_dto_exposes_hex_ids() {
        let student_id = ObjectId::new();
        let course_id = ObjectId::new();
        let mut admission = Admission::new(
            student_id,
            course_id,
            PersonalDetails::default(),
            AcademicDetails::default(),
            Documents::default(),
        );
        admission.id = Some(ObjectId::new());

        let dto: AdmissionDto = admission.into();
        assert_eq!(dto.student_id, student_id.to_hex());
        assert_eq!(dto.course_id, course_id.to_hex());
        assert_eq!(dto.status, AdmissionStatus::Pending);
    }
}

use serde::Deserialize;
use validator::Validate;

use crate::models::domain::admission::{AcademicDetails, Documents, PersonalDetails};
use crate::models::domain::course::{EligibilityCriteria, Fees};
use crate::models::domain::student::Address;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub phone: Option<String>,

    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,

    pub gender: Option<String>,

    pub address: Option<Address>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub seats: i32,

    #[serde(rename = "eligibilityCriteria", default)]
    pub eligibility_criteria: EligibilityCriteria,

    #[serde(default)]
    pub fees: Fees,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApplyAdmissionRequest {
    #[serde(rename = "courseId")]
    #[validate(length(min = 1, message = "Course ID is required"))]
    pub course_id: String,

    #[serde(rename = "personalDetails", default)]
    pub personal_details: PersonalDetails,

    #[serde(rename = "academicDetails", default)]
    pub academic_details: AcademicDetails,

    #[serde(default)]
    pub documents: Documents,
}

/// Status carried as a plain string so that out-of-range values surface as a
/// `ValidationError` from the policy layer rather than a deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdmissionStatusRequest {
    pub status: String,

    #[serde(default)]
    pub comments: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            name: "Jane".to_string(),
            phone: String::new(),
            date_of_birth: String::new(),
            gender: String::new(),
            address: Address::default(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = SignupRequest {
            password: "short".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_update_profile_optional_fields_validate() {
        let empty = UpdateProfileRequest {
            name: None,
            phone: None,
            date_of_birth: None,
            gender: None,
            address: None,
            password: None,
        };
        assert!(empty.validate().is_ok());

        let bad_password = UpdateProfileRequest {
            password: Some("abc".to_string()),
            ..empty
        };
        assert!(bad_password.validate().is_err());
    }

    #[test]
    fn test_apply_admission_deserializes_camel_case() {
        let json = serde_json::json!({
            "courseId": "64b0c5f2a1e4d3b2c1a09876",
            "personalDetails": { "firstName": "Jane", "lastName": "Doe" },
            "academicDetails": { "highestQualification": "High School" }
        });

        let request: ApplyAdmissionRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.course_id, "64b0c5f2a1e4d3b2c1a09876");
        assert_eq!(request.personal_details.first_name, "Jane");
        assert_eq!(
            request.academic_details.highest_qualification,
            "High School"
        );
    }
}

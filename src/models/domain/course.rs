use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::dto::request::CourseRequest;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    #[serde(rename = "minimumPercentage", default)]
    pub minimum_percentage: f64,
    #[serde(rename = "requiredSubjects", default)]
    pub required_subjects: Vec<String>,
    #[serde(rename = "entranceExam", default)]
    pub entrance_exam: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    #[serde(rename = "tuitionFee", default)]
    pub tuition_fee: f64,
    #[serde(rename = "admissionFee", default)]
    pub admission_fee: f64,
    #[serde(rename = "otherFees", default)]
    pub other_fees: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Course {
    pub fn from_request(request: CourseRequest) -> Self {
        let now = Utc::now();

        Course {
            id: None,
            name: request.name,
            description: request.description,
            duration: request.duration,
            seats: request.seats,
            eligibility_criteria: request.eligibility_criteria,
            fees: request.fees,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// The allow-listed mutable fields of a course. Timestamps are stamped here;
/// `_id` and `created_at` are not reachable.
#[derive(Clone, Debug)]
pub struct CourseUpdate {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub seats: i32,
    pub eligibility_criteria: EligibilityCriteria,
    pub fees: Fees,
}

impl CourseUpdate {
    pub fn into_update_document(self) -> AppResult<Document> {
        Ok(doc! {
            "$set": {
                "name": self.name,
                "description": self.description,
                "duration": self.duration,
                "seats": self.seats,
                "eligibilityCriteria": mongodb::bson::to_bson(&self.eligibility_criteria)?,
                "fees": mongodb::bson::to_bson(&self.fees)?,
                "updated_at": mongodb::bson::to_bson(&Utc::now())?,
            }
        })
    }
}

impl From<CourseRequest> for CourseUpdate {
    fn from(request: CourseRequest) -> Self {
        CourseUpdate {
            name: request.name,
            description: request.description,
            duration: request.duration,
            seats: request.seats,
            eligibility_criteria: request.eligibility_criteria,
            fees: request.fees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_request() -> CourseRequest {
        CourseRequest {
            name: "B.Sc. Computer Science".to_string(),
            description: "Three year undergraduate programme".to_string(),
            duration: "3 years".to_string(),
            seats: 60,
            eligibility_criteria: EligibilityCriteria {
                minimum_percentage: 65.0,
                required_subjects: vec!["Mathematics".to_string()],
                entrance_exam: true,
            },
            fees: Fees {
                tuition_fee: 5200.0,
                admission_fee: 300.0,
                other_fees: 150.0,
            },
        }
    }

    #[test]
    fn test_course_from_request_stamps_timestamps() {
        let course = Course::from_request(course_request());

        assert_eq!(course.name, "B.Sc. Computer Science");
        assert!(course.id.is_none());
        assert!(course.created_at.is_some());
        assert_eq!(course.created_at, course.updated_at);
    }

    #[test]
    fn test_course_update_document_allow_list() {
        let update: CourseUpdate = course_request().into();
        let document = update.into_update_document().unwrap();
        let set = document.get_document("$set").unwrap();

        assert_eq!(set.get_str("name").unwrap(), "B.Sc. Computer Science");
        assert_eq!(set.get_i32("seats").unwrap(), 60);
        assert!(set.contains_key("eligibilityCriteria"));
        assert!(set.contains_key("updated_at"));
        assert!(!set.contains_key("_id"));
        assert!(!set.contains_key("created_at"));
    }
}

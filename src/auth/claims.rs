use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::student::{Role, Student};

/// JWT claims: the subject's id (ObjectId hex), their role at issuance time,
/// and the expiry. Role changes after issuance are not reflected until the
/// subject logs in again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub role: Role,
    pub exp: usize, // Expiration time (as UTC timestamp)
}

impl Claims {
    pub fn new(subject_id: String, role: Role, expiration_hours: i64) -> Self {
        let exp = Utc::now() + Duration::hours(expiration_hours);

        Self {
            user_id: subject_id,
            role,
            exp: exp.timestamp() as usize,
        }
    }

    pub fn for_student(student: &Student, expiration_hours: i64) -> Option<Self> {
        student
            .id
            .as_ref()
            .map(|oid| Self::new(oid.to_hex(), student.role, expiration_hours))
    }
}

use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::student::Role,
};

/// Parses a caller-supplied identifier before any persistence lookup happens.
pub fn parse_object_id(id: &str, what: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("Invalid {} ID", what)))
}

/// The verified subject id carried by the token, as an ObjectId.
pub fn caller_id(claims: &Claims) -> AppResult<ObjectId> {
    parse_object_id(&claims.user_id, "user")
}

pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if claims.role != Role::Admin {
        return Err(AppError::Forbidden(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

/// Ownership is enforced through the lookup filter itself: a record that
/// exists but belongs to another student matches nothing and surfaces as
/// `NotFound`, so readers cannot learn whether it exists.
pub fn owned_admission_filter(admission_id: ObjectId, student_id: ObjectId) -> Document {
    doc! { "_id": admission_id, "studentId": student_id }
}

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::dto::request::SignupRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "zipCode", default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

/// An identity record. `password` holds the bcrypt hash and is only ever
/// serialized towards the database; client-facing DTOs omit it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: Address,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Student {
    /// Builds a new identity from a signup request. The role is decided by the
    /// signup path, never by the request body.
    pub fn from_signup(request: SignupRequest, password_hash: String, role: Role) -> Self {
        let now = Utc::now();

        Student {
            id: None,
            email: request.email,
            password: password_hash,
            name: request.name,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            gender: request.gender,
            address: request.address,
            role,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Explicit partial update for a student profile. Only the fields enumerated
/// here can ever reach the `$set` document; the owner id and role cannot.
#[derive(Clone, Debug, Default)]
pub struct StudentProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<Address>,
    pub password_hash: Option<String>,
}

impl StudentProfileUpdate {
    pub fn into_update_document(self) -> AppResult<Document> {
        let mut set = doc! { "updated_at": mongodb::bson::to_bson(&Utc::now())? };

        if let Some(name) = self.name {
            set.insert("name", name);
        }
        if let Some(phone) = self.phone {
            set.insert("phone", phone);
        }
        if let Some(date_of_birth) = self.date_of_birth {
            set.insert("dateOfBirth", date_of_birth);
        }
        if let Some(gender) = self.gender {
            set.insert("gender", gender);
        }
        if let Some(address) = self.address {
            set.insert("address", mongodb::bson::to_bson(&address)?);
        }
        if let Some(password_hash) = self.password_hash {
            set.insert("password", password_hash);
        }

        Ok(doc! { "$set": set })
    }
}

#[cfg(test)]
impl Student {
    pub fn test_student(email: &str, role: Role) -> Self {
        let now = Utc::now();
        Student {
            id: None,
            email: email.to_string(),
            password: "$2b$12$invalidhashforfixtureuseonly".to_string(),
            name: "Test Student".to_string(),
            phone: String::new(),
            date_of_birth: String::new(),
            gender: String::new(),
            address: Address::default(),
            role,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use validator::Validate;

use crate::{
    auth::{caller_id, hash_password, verify_password, Claims, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::{Role, Student, StudentProfileUpdate},
        dto::{
            request::{LoginRequest, SignupRequest, UpdateProfileRequest},
            response::{MessageResponse, StudentDto, TokenResponse},
        },
    },
    repositories::StudentRepository,
};

pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
    jwt_service: JwtService,
    admin_secret: Option<SecretString>,
}

impl StudentService {
    pub fn new(
        repository: Arc<dyn StudentRepository>,
        jwt_service: JwtService,
        admin_secret: Option<SecretString>,
    ) -> Self {
        Self {
            repository,
            jwt_service,
            admin_secret,
        }
    }

    /// Public signup. The role is always `student` no matter what the body
    /// claims.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<StudentDto> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let student = Student::from_signup(request, password_hash, Role::Student);
        let student = self.repository.create(student).await?;

        Ok(student.into())
    }

    /// Unknown email and wrong password produce the same error, so a caller
    /// cannot enumerate accounts.
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        request.validate()?;

        let student = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !verify_password(&request.password, &student.password) {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = self.jwt_service.create_token(&student)?;
        Ok(TokenResponse { token })
    }

    /// Admin creation, gated on the shared `X-Admin-Secret` value. The secret
    /// check runs before anything else; on mismatch no identity is created.
    pub async fn create_admin(
        &self,
        provided_secret: Option<&str>,
        request: SignupRequest,
    ) -> AppResult<StudentDto> {
        match (&self.admin_secret, provided_secret) {
            (Some(expected), Some(given)) if given == expected.expose_secret() => {}
            _ => return Err(AppError::Forbidden("Forbidden".to_string())),
        }

        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let admin = Student::from_signup(request, password_hash, Role::Admin);
        let admin = self.repository.create(admin).await?;

        Ok(admin.into())
    }

    pub async fn get_profile(&self, claims: &Claims) -> AppResult<StudentDto> {
        let id = caller_id(claims)?;

        let student = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        Ok(student.into())
    }

    pub async fn update_profile(
        &self,
        claims: &Claims,
        request: UpdateProfileRequest,
    ) -> AppResult<MessageResponse> {
        request.validate()?;
        let id = caller_id(claims)?;

        let password_hash = match request.password {
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };

        let update = StudentProfileUpdate {
            name: request.name,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            gender: request.gender,
            address: request.address,
            password_hash,
        };

        self.repository.update_profile(id, update).await?;
        Ok(MessageResponse::new("Profile updated successfully"))
    }

    /// Requires authentication only; there is intentionally no admin gate on
    /// this listing.
    pub async fn list_admins(&self) -> AppResult<Vec<StudentDto>> {
        let admins = self.repository.find_admins().await?;
        Ok(admins.into_iter().map(StudentDto::from).collect())
    }
}

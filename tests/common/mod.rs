#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::Utc;
use secrecy::SecretString;
use tokio::sync::RwLock;

use admission_portal::{
    app_state::AppState,
    auth::{Claims, JwtService},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        student::Role, Admission, AdmissionStatusUpdate, Course, CourseUpdate, Student,
        StudentProfileUpdate,
    },
    models::dto::request::{ApplyAdmissionRequest, SignupRequest},
    repositories::{AdmissionRepository, CourseRepository, StudentRepository},
    services::{AdmissionService, CourseService, StudentService},
};

pub const ADMIN_SECRET: &str = "integration_admin_secret";

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "admission_portal_test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        jwt_secret: SecretString::from("integration_jwt_secret".to_string()),
        jwt_expiration_hours: 1,
        admin_secret: Some(SecretString::from(ADMIN_SECRET.to_string())),
    }
}

#[derive(Default)]
pub struct InMemoryStudentRepository {
    pub students: RwLock<HashMap<ObjectId, Student>>,
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, mut student: Student) -> AppResult<Student> {
        let mut students = self.students.write().await;

        if students.values().any(|s| s.email == student.email) {
            return Err(AppError::AlreadyExists(format!(
                "student with email '{}' already exists",
                student.email
            )));
        }

        let id = ObjectId::new();
        student.id = Some(id);
        students.insert(id, student.clone());
        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let students = self.students.read().await;
        Ok(students.values().find(|s| s.email == email).cloned())
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Student>> {
        let students = self.students.read().await;
        Ok(students.get(&id).cloned())
    }

    async fn update_profile(&self, id: ObjectId, update: StudentProfileUpdate) -> AppResult<()> {
        let mut students = self.students.write().await;
        let student = students
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if let Some(name) = update.name {
            student.name = name;
        }
        if let Some(phone) = update.phone {
            student.phone = phone;
        }
        if let Some(date_of_birth) = update.date_of_birth {
            student.date_of_birth = date_of_birth;
        }
        if let Some(gender) = update.gender {
            student.gender = gender;
        }
        if let Some(address) = update.address {
            student.address = address;
        }
        if let Some(password_hash) = update.password_hash {
            student.password = password_hash;
        }
        student.updated_at = Some(Utc::now());

        Ok(())
    }

    async fn find_admins(&self) -> AppResult<Vec<Student>> {
        let students = self.students.read().await;
        Ok(students
            .values()
            .filter(|s| s.role == Role::Admin)
            .cloned()
            .collect())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCourseRepository {
    pub courses: RwLock<HashMap<ObjectId, Course>>,
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, mut course: Course) -> AppResult<Course> {
        let mut courses = self.courses.write().await;
        let id = ObjectId::new();
        course.id = Some(id);
        courses.insert(id, course.clone());
        Ok(course)
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.get(&id).cloned())
    }

    async fn update(&self, id: ObjectId, update: CourseUpdate) -> AppResult<()> {
        let mut courses = self.courses.write().await;
        let course = courses
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        course.name = update.name;
        course.description = update.description;
        course.duration = update.duration;
        course.seats = update.seats;
        course.eligibility_criteria = update.eligibility_criteria;
        course.fees = update.fees;
        course.updated_at = Some(Utc::now());

        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let mut courses = self.courses.write().await;
        courses
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryAdmissionRepository {
    pub admissions: RwLock<HashMap<ObjectId, Admission>>,
}

#[async_trait]
impl AdmissionRepository for InMemoryAdmissionRepository {
    async fn create(&self, mut admission: Admission) -> AppResult<Admission> {
        let mut admissions = self.admissions.write().await;
        let id = ObjectId::new();
        admission.id = Some(id);
        admissions.insert(id, admission.clone());
        Ok(admission)
    }

    async fn find_by_student(&self, student_id: ObjectId) -> AppResult<Vec<Admission>> {
        let admissions = self.admissions.read().await;
        Ok(admissions
            .values()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn find_owned(
        &self,
        id: ObjectId,
        student_id: ObjectId,
    ) -> AppResult<Option<Admission>> {
        let admissions = self.admissions.read().await;
        // Same contract as the Mongo filter: wrong owner matches nothing
        Ok(admissions
            .get(&id)
            .filter(|a| a.student_id == student_id)
            .cloned())
    }

    async fn update_status(&self, id: ObjectId, update: AdmissionStatusUpdate) -> AppResult<()> {
        let mut admissions = self.admissions.write().await;
        let admission = admissions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Admission not found".to_string()))?;

        admission.status = update.status;
        admission.comments = update.comments;
        admission.updated_at = Utc::now();

        Ok(())
    }
}

pub struct TestBackend {
    pub state: Arc<AppState>,
    pub jwt_service: JwtService,
    pub student_repository: Arc<InMemoryStudentRepository>,
    pub admission_repository: Arc<InMemoryAdmissionRepository>,
    pub course_repository: Arc<InMemoryCourseRepository>,
}

/// A fully wired application over in-memory repositories.
pub fn test_backend() -> TestBackend {
    let config = test_config();
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

    let student_repository = Arc::new(InMemoryStudentRepository::default());
    let course_repository = Arc::new(InMemoryCourseRepository::default());
    let admission_repository = Arc::new(InMemoryAdmissionRepository::default());

    let state = AppState {
        student_service: Arc::new(StudentService::new(
            student_repository.clone(),
            jwt_service.clone(),
            config.admin_secret.clone(),
        )),
        course_service: Arc::new(CourseService::new(course_repository.clone())),
        admission_service: Arc::new(AdmissionService::new(admission_repository.clone())),
        config: Arc::new(config),
    };

    TestBackend {
        state: Arc::new(state),
        jwt_service,
        student_repository,
        admission_repository,
        course_repository,
    }
}

pub fn claims_for(id: ObjectId, role: Role) -> Claims {
    Claims::new(id.to_hex(), role, 1)
}

pub fn signup_request(email: &str) -> SignupRequest {
    serde_json::from_value(serde_json::json!({
        "email": email,
        "password": "secret123",
        "name": "Test Student",
        "phone": "555-0100"
    }))
    .expect("signup request fixture deserializes")
}

pub fn apply_request(course_id: &str) -> ApplyAdmissionRequest {
    serde_json::from_value(serde_json::json!({
        "courseId": course_id,
        "personalDetails": { "firstName": "Test", "lastName": "Student" },
        "academicDetails": { "highestQualification": "High School", "percentage": 82.5 }
    }))
    .expect("apply request fixture deserializes")
}

pub mod admission_repository;
pub mod course_repository;
pub mod student_repository;

pub use admission_repository::{AdmissionRepository, MongoAdmissionRepository};
pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use student_repository::{MongoStudentRepository, StudentRepository};

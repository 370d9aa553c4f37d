pub mod admission_service;
pub mod course_service;
pub mod student_service;

pub use admission_service::AdmissionService;
pub use course_service::CourseService;
pub use student_service::StudentService;

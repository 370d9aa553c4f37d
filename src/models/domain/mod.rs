pub mod admission;
pub mod course;
pub mod student;

pub use admission::{Admission, AdmissionStatus, AdmissionStatusUpdate};
pub use course::{Course, CourseUpdate};
pub use student::{Role, Student, StudentProfileUpdate};

pub mod fixtures {
    use bson::oid::ObjectId;

    use crate::models::domain::student::{Role, Student};

    /// A student as it looks after insertion, with an assigned ObjectId.
    pub fn saved_student(email: &str, role: Role) -> Student {
        let mut student = Student::test_student(email, role);
        student.id = Some(ObjectId::new());
        student
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::student::Role;

    #[test]
    fn test_saved_student_has_id() {
        let student = saved_student("fixture@example.com", Role::Admin);
        assert!(student.id.is_some());
        assert_eq!(student.role, Role::Admin);
    }
}

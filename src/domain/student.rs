use thiserror::Error;

/// Rejection reasons for submitted student fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("student name must not be blank")]
    BlankName,

    #[error("student id must not be blank")]
    BlankStudentId,
}

/// A persisted student record. The `id` is assigned by the store and never
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub student_id: String,
}

/// The reduced projection held by the roster: name plus the external
/// student id, without the store-assigned key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentEntry {
    pub name: String,
    pub student_id: String,
}

impl StudentEntry {
    /// Build an entry from raw form input. Both fields are trimmed and must
    /// be non-blank.
    pub fn new(name: &str, student_id: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let student_id = student_id.trim();

        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }
        if student_id.is_empty() {
            return Err(ValidationError::BlankStudentId);
        }

        Ok(Self {
            name: name.to_string(),
            student_id: student_id.to_string(),
        })
    }
}

impl From<Student> for StudentEntry {
    fn from(student: Student) -> Self {
        Self {
            name: student.name,
            student_id: student.student_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_trims_both_fields() {
        let entry = StudentEntry::new("  Alice Nguyen ", " SV001 ").unwrap();
        assert_eq!(entry.name, "Alice Nguyen");
        assert_eq!(entry.student_id, "SV001");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            StudentEntry::new("   ", "SV001"),
            Err(ValidationError::BlankName)
        );
        assert_eq!(StudentEntry::new("", "SV001"), Err(ValidationError::BlankName));
    }

    #[test]
    fn blank_student_id_is_rejected() {
        assert_eq!(
            StudentEntry::new("Alice", "  "),
            Err(ValidationError::BlankStudentId)
        );
    }

    #[test]
    fn student_projects_to_entry_without_internal_key() {
        let student = Student {
            id: 7,
            name: "Bob".to_string(),
            student_id: "SV002".to_string(),
        };
        let entry = StudentEntry::from(student);
        assert_eq!(entry.name, "Bob");
        assert_eq!(entry.student_id, "SV002");
    }
}

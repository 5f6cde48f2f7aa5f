use crate::{unique_timestamp_id, AppError, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which kind of account the admin form creates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Teacher,
    #[default]
    Student,
}

impl AccountType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "teacher" => Some(AccountType::Teacher),
            "student" => Some(AccountType::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Teacher => "teacher",
            AccountType::Student => "student",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Teacher => "Teacher",
            AccountType::Student => "Student",
        }
    }
}

/// Type-specific details of a managed account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UserKind {
    Teacher {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        department: Option<String>,
    },
    Student {
        #[serde(default, rename = "studentId", skip_serializing_if = "Option::is_none")]
        student_id: Option<String>,
    },
}

impl UserKind {
    pub fn account_type(&self) -> AccountType {
        match self {
            UserKind::Teacher { .. } => AccountType::Teacher,
            UserKind::Student { .. } => AccountType::Student,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            UserKind::Teacher { .. } => Role::Teacher,
            UserKind::Student { .. } => Role::Student,
        }
    }

    /// Department for teachers, student id for students.
    pub fn detail(&self) -> Option<&str> {
        match self {
            UserKind::Teacher { department } => department.as_deref(),
            UserKind::Student { student_id } => student_id.as_deref(),
        }
    }
}

/// A teacher or student account listed on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub kind: UserKind,
}

impl ManagedUser {
    pub fn is_teacher(&self) -> bool {
        matches!(self.kind, UserKind::Teacher { .. })
    }

    pub fn is_student(&self) -> bool {
        matches!(self.kind, UserKind::Student { .. })
    }
}

/// "Add New User" form state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct NewUserForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    pub account_type: AccountType,
    pub department: String,
    pub student_id: String,
}

impl NewUserForm {
    /// Only the field matching the selected type is kept; a blank one is
    /// stored as `None`.
    fn kind(&self) -> UserKind {
        match self.account_type {
            AccountType::Teacher => UserKind::Teacher {
                department: non_blank(&self.department),
            },
            AccountType::Student => UserKind::Student {
                student_id: non_blank(&self.student_id),
            },
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Head counts shown in the admin stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryStats {
    pub total: usize,
    pub teachers: usize,
    pub students: usize,
}

/// In-memory account list owned by the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    users: Vec<ManagedUser>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-filled with the demo accounts.
    pub fn seeded() -> Self {
        Self {
            users: vec![
                ManagedUser {
                    id: "1".into(),
                    name: "Dr. John Smith".into(),
                    email: "john.smith@school.edu".into(),
                    kind: UserKind::Teacher {
                        department: Some("Computer Science".into()),
                    },
                },
                ManagedUser {
                    id: "2".into(),
                    name: "Alice Johnson".into(),
                    email: "alice.j@student.edu".into(),
                    kind: UserKind::Student {
                        student_id: Some("CS2024001".into()),
                    },
                },
                ManagedUser {
                    id: "3".into(),
                    name: "Bob Wilson".into(),
                    email: "bob.w@student.edu".into(),
                    kind: UserKind::Student {
                        student_id: Some("CS2024002".into()),
                    },
                },
            ],
        }
    }

    pub fn users(&self) -> &[ManagedUser] {
        &self.users
    }

    pub fn teachers(&self) -> impl Iterator<Item = &ManagedUser> {
        self.users.iter().filter(|u| u.is_teacher())
    }

    pub fn students(&self) -> impl Iterator<Item = &ManagedUser> {
        self.users.iter().filter(|u| u.is_student())
    }

    /// Validate the form and append a new account.
    ///
    /// Name and email are required. The id is the current Unix-millisecond
    /// timestamp, bumped if another account already holds it.
    pub fn add_user(&mut self, form: &NewUserForm, now: DateTime<Utc>) -> Result<ManagedUser, AppError> {
        form.validate()
            .map_err(|e| AppError::from_validation("Please fill in all required fields", e))?;

        let id = unique_timestamp_id(now, self.users.iter().map(|u| u.id.as_str()));
        let user = ManagedUser {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            kind: form.kind(),
        };
        self.users.push(user.clone());
        Ok(user)
    }

    /// Remove the account with `id`. Unknown ids leave the list untouched.
    pub fn delete_user(&mut self, id: &str) -> Option<ManagedUser> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            total: self.users.len(),
            teachers: self.teachers().count(),
            students: self.students().count(),
        }
    }
}

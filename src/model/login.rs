use std::fmt::Debug;

/// `true` iff both fields are non-empty. No other validation.
pub fn can_submit(username: &str, password: &str) -> bool {
    !username.is_empty() && !password.is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
}

/// Form state of the login page. Lives only while that page is mounted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn set(&mut self, field: CredentialField, value: String) {
        match field {
            CredentialField::Username => self.username = value,
            CredentialField::Password => self.password = value,
        }
    }

    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::Username => &self.username,
            CredentialField::Password => &self.password,
        }
    }

    pub fn can_submit(&self) -> bool {
        can_submit(&self.username, &self.password)
    }
}

// Keeps the password out of debug logs.
impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

use serde::{Deserialize, Serialize};

/// The authenticated user. Single active session object: replaced
/// wholesale on login, merged shallowly on profile update, cleared
/// on logout.
///
/// `birth_date` stays a plain string. Registration defaults missing
/// optionals to empty strings, which no date type would accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub birth_date: String,
    pub phone: String,
    pub avatar_url: Option<String>,
}

/// Fields captured by the registration form. Optionals missing at
/// submit default to empty strings on the created user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: Option<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
}

/// Partial user update for the profile screen. Only `Some` fields
/// are merged; identity (`id`) is not editable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    /// Shallow-merge the supplied fields into `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(first_name) = &self.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(dni) = &self.dni {
            user.dni = dni.clone();
        }
        if let Some(birth_date) = &self.birth_date {
            user.birth_date = birth_date.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(avatar_url) = &self.avatar_url {
            user.avatar_url = Some(avatar_url.clone());
        }
    }
}

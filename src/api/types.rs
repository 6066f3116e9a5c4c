//! Wire types for the users endpoint.

use serde::{Deserialize, Serialize};

/// Company name used when a new user is created without one.
pub const DEFAULT_COMPANY: &str = "New Company";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Company {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY)
    }
}

/// A user record as returned by the remote service.
///
/// Extra fields in responses (`username`, `address`, `phone`, ...) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub company: Company,
}

/// Input for creating a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), company: None }
    }

    pub fn with_company(mut self, name: impl Into<String>) -> Self {
        self.company = Some(Company::new(name));
        self
    }
}

/// Partial input for an update; absent fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

/// Body of `POST /users`: the new user with a client-side id and a resolved company.
#[derive(Debug, Serialize)]
pub(crate) struct CreateBody<'a> {
    pub id: u64,
    pub name: &'a str,
    pub email: &'a str,
    pub company: Company,
}

impl<'a> CreateBody<'a> {
    pub fn new(user: &'a NewUser, id: u64) -> Self {
        Self {
            id,
            name: &user.name,
            email: &user.email,
            company: user.company.clone().unwrap_or_default(),
        }
    }
}

/// Body of `PUT /users/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateBody<'a> {
    pub id: u64,
    #[serde(flatten)]
    pub patch: &'a UserPatch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_decode_ignores_extra_fields() {
        let raw = json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered" }
        });
        let user: User = serde_json::from_value(raw).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.company.name, "Romaguera-Crona");
    }

    #[test]
    fn create_body_defaults_company() {
        let new = NewUser::new("Ada", "ada@x.com");
        let body = serde_json::to_value(CreateBody::new(&new, 42)).unwrap();
        assert_eq!(
            body,
            json!({ "id": 42, "name": "Ada", "email": "ada@x.com", "company": { "name": "New Company" } })
        );
    }

    #[test]
    fn create_body_keeps_given_company() {
        let new = NewUser::new("Ada", "ada@x.com").with_company("Analytical Engines");
        let body = serde_json::to_value(CreateBody::new(&new, 1)).unwrap();
        assert_eq!(body["company"]["name"], "Analytical Engines");
    }

    #[test]
    fn update_body_only_sends_present_fields() {
        let patch = UserPatch { email: Some("new@x.com".into()), ..Default::default() };
        let body = serde_json::to_value(UpdateBody { id: 7, patch: &patch }).unwrap();
        assert_eq!(body, json!({ "id": 7, "email": "new@x.com" }));
    }
}

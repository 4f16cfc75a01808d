//! Access Control
//!
//! Locally stored accounts with per-page view/edit permissions.
//! Everything that mutates a board only ever sees the resulting boolean
//! through [`AccessGate`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::config::{ADMIN_EMAIL, ADMIN_ID, ADMIN_NAME, ADMIN_PASSWORD, MIN_PASSWORD_LEN};

/// Boolean edit permission consulted by every mutating entry point
pub trait AccessGate {
    fn can_edit(&self) -> bool;
}

impl AccessGate for bool {
    fn can_edit(&self) -> bool {
        *self
    }
}

impl AccessGate for PagePermission {
    fn can_edit(&self) -> bool {
        self.can_edit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePermission {
    pub can_view: bool,
    pub can_edit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    /// Page id -> permission
    #[serde(default)]
    pub permissions: HashMap<String, PagePermission>,
}

impl UserAccount {
    /// Seeded administrator account
    pub fn admin() -> Self {
        Self {
            id: ADMIN_ID.to_string(),
            name: ADMIN_NAME.to_string(),
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            is_admin: true,
            permissions: HashMap::new(),
        }
    }

    /// Effective permission on a page (`None` = no page selected)
    pub fn permission_for(&self, page_id: Option<&str>) -> PagePermission {
        if self.is_admin {
            return PagePermission { can_view: true, can_edit: true };
        }
        match page_id {
            Some(id) => self.permissions.get(id).copied().unwrap_or_default(),
            None => PagePermission { can_view: true, can_edit: false },
        }
    }
}

/// Permission of an optional signed-in user on an optional page
pub fn page_permission(user: Option<&UserAccount>, page_id: Option<&str>) -> PagePermission {
    match user {
        Some(u) => u.permission_for(page_id),
        None => PagePermission {
            can_view: page_id.is_none(),
            can_edit: false,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Ingresa un correo electronico valido.")]
    InvalidEmail,
    #[error("La contrasena debe tener al menos {0} caracteres.")]
    PasswordTooShort(usize),
    #[error("Credenciales invalidas.")]
    InvalidCredentials,
    #[error("No existe un usuario con ese correo.")]
    UnknownUser,
    #[error("Ya existe un usuario con ese correo.")]
    DuplicateEmail,
}

/// `something@something.something` with no whitespace
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .rsplit_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// The local account list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    users: Vec<UserAccount>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self { users: vec![UserAccount::admin()] }
    }
}

impl UserDirectory {
    pub fn new(users: Vec<UserAccount>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    pub fn find_by_email(&self, email: &str) -> Option<&UserAccount> {
        let email = normalize_email(email);
        self.users.iter().find(|u| u.email == email)
    }

    /// Validate and match credentials; returns the account on success
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&UserAccount, AuthError> {
        let email = normalize_email(email);
        let password = password.trim();
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Password recovery only checks that the account exists
    pub fn recover(&self, email: &str) -> Result<&UserAccount, AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        self.find_by_email(email).ok_or(AuthError::UnknownUser)
    }

    pub fn add(&mut self, mut user: UserAccount) -> Result<(), AuthError> {
        user.email = normalize_email(&user.email);
        if !is_valid_email(&user.email) {
            return Err(AuthError::InvalidEmail);
        }
        if self.users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail);
        }
        self.users.push(user);
        Ok(())
    }

    /// Replace the account with the same id
    pub fn update(&mut self, mut user: UserAccount) -> Result<(), AuthError> {
        user.email = normalize_email(&user.email);
        if self.users.iter().any(|u| u.email == user.email && u.id != user.id) {
            return Err(AuthError::DuplicateEmail);
        }
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(AuthError::UnknownUser),
        }
    }

    pub fn remove(&mut self, user_id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != user_id);
        self.users.len() != before
    }
}

//! User profiles: validated construction and named update functions.
//!
//! A `User` can only be built through [`create_user`] (or [`User::new`]),
//! and every field except the id can only change through an `update_*`
//! method that validates first. A rejected update leaves the record as it
//! was.

use std::fmt;

use tracing::{debug, warn};

use crate::error::UserError;

/// Youngest accepted age.
pub const MIN_AGE: u32 = 13;

/// Fallback used by [`User::city_or`] in the demonstrations.
pub const UNKNOWN_CITY: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

impl Address {
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Address {
            street: street.into(),
            city: city.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    age: u32,
    email: Option<String>,
    address: Option<Address>,
}

/// Which field an update touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Email,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Email => "email",
            Field::Address => "address",
        };
        f.write_str(name)
    }
}

/// Confirmation returned by a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub id: UserId,
    pub field: Field,
    pub previous: String,
    pub current: String,
}

impl fmt::Display for ProfileUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "updated {} of user {}: {} -> {}",
            self.field, self.id, self.previous, self.current
        )
    }
}

pub fn validate_name(name: &str) -> Result<&str, UserError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(UserError::NameEmpty);
    }
    Ok(trimmed)
}

pub fn validate_age(age: u32) -> Result<u32, UserError> {
    if age < MIN_AGE {
        return Err(UserError::age_too_young(age));
    }
    Ok(age)
}

/// Accepts any address containing `@` and normalises it to lower case.
pub fn validate_email(email: &str) -> Result<String, UserError> {
    if !email.contains('@') {
        return Err(UserError::EmailInvalid(email.to_string()));
    }
    Ok(email.to_lowercase())
}

/// Validate name, age and email in that order and build the record.
/// The first failing check is reported.
pub fn create_user(
    id: UserId,
    name: &str,
    age: u32,
    email: Option<&str>,
) -> Result<User, UserError> {
    let name = validate_name(name)?.to_string();
    let age = validate_age(age)?;
    let email = email.map(validate_email).transpose()?;
    debug!(%id, %name, "user created");
    Ok(User {
        id,
        name,
        age,
        email,
        address: None,
    })
}

fn render_optional(value: Option<&str>) -> String {
    value.map_or_else(|| "-".to_string(), str::to_string)
}

impl User {
    pub fn new(id: UserId, name: &str, age: u32, email: Option<&str>) -> Result<Self, UserError> {
        create_user(id, name, age, email)
    }

    /// Builder-style address assignment used when constructing samples.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// City of the user's address, or `default` when no address is set.
    pub fn city_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.address
            .as_ref()
            .map(|address| address.city.as_str())
            .unwrap_or(default)
    }

    pub fn update_name(&mut self, name: &str) -> Result<ProfileUpdate, UserError> {
        let name = self.checked(validate_name(name))?.to_string();
        let previous = std::mem::replace(&mut self.name, name);
        Ok(self.confirm(Field::Name, previous, self.name.clone()))
    }

    pub fn update_age(&mut self, age: u32) -> Result<ProfileUpdate, UserError> {
        let age = self.checked(validate_age(age))?;
        let previous = std::mem::replace(&mut self.age, age);
        Ok(self.confirm(Field::Age, previous.to_string(), age.to_string()))
    }

    pub fn update_email(&mut self, email: &str) -> Result<ProfileUpdate, UserError> {
        let email = self.checked(validate_email(email))?;
        let previous = self.email.replace(email.clone());
        Ok(self.confirm(Field::Email, render_optional(previous.as_deref()), email))
    }

    pub fn clear_email(&mut self) -> ProfileUpdate {
        let previous = self.email.take();
        self.confirm(Field::Email, render_optional(previous.as_deref()), "-".into())
    }

    pub fn set_address(&mut self, address: Option<Address>) -> ProfileUpdate {
        let city = |a: &Option<Address>| render_optional(a.as_ref().map(|a| a.city.as_str()));
        let previous = city(&self.address);
        self.address = address;
        let current = city(&self.address);
        self.confirm(Field::Address, previous, current)
    }

    fn checked<T>(&self, result: Result<T, UserError>) -> Result<T, UserError> {
        if let Err(err) = &result {
            warn!(id = %self.id, error = %err, "rejected profile update");
        }
        result
    }

    fn confirm(&self, field: Field, previous: String, current: String) -> ProfileUpdate {
        debug!(id = %self.id, %field, %previous, %current, "profile updated");
        ProfileUpdate {
            id: self.id,
            field,
            previous,
            current,
        }
    }
}

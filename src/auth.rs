// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Registration and credential checks. Only verifies passwords; issuing
//! sessions or tokens is left to whatever fronts the API.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::{info, warn};

use crate::errors::{Error, Result};
use crate::inputs::{LoginInput, RegisterInput};
use crate::models::{NewUser, User};
use crate::storage::FinanceStore;

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| Error::PasswordHash(e.to_string()))
}

/// A stored hash that does not parse never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

pub fn register(store: &dyn FinanceStore, input: &RegisterInput) -> Result<User> {
    input.validate()?;
    let new_user = NewUser {
        username: input.username.trim().to_string(),
        email: input.email.trim().to_lowercase(),
        password_hash: hash_password(&input.password)?,
    };
    let user = store.create_user(&new_user)?;
    info!(user_id = user.id, username = %user.username, "registered user");
    Ok(user)
}

pub fn login(store: &dyn FinanceStore, input: &LoginInput) -> Result<User> {
    let email = input.email.trim().to_lowercase();
    let Some(creds) = store.find_credentials_by_email(&email)? else {
        warn!(%email, "login for unknown email");
        return Err(Error::Unauthorized);
    };
    if !creds.user.is_active || !verify_password(&input.password, &creds.password_hash) {
        warn!(user_id = creds.user.id, "login rejected");
        return Err(Error::Unauthorized);
    }
    Ok(creds.user)
}

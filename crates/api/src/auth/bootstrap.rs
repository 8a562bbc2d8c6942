//! Startup account provisioning.

use mediashelf_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAccount;
use crate::error::{AppError, AppResult};

/// Create the configured account unless a user with that name already exists.
///
/// Returns `true` when a new account was created. An existing account is left
/// untouched, including its password.
pub async fn ensure_account(pool: &PgPool, account: &BootstrapAccount) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &account.username)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    let hash = hash_password(&account.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(pool, &account.username, &hash).await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap account created");
    Ok(true)
}

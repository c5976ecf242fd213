//! Profile Service - contact email and purchase history

use serde::Serialize;

use crate::domain::{DomainError, PurchaseRecord, SaleRepository, User, UserRepository};
use crate::infrastructure::auth::AuthUser;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub user: User,
    pub purchases: Vec<PurchaseRecord>,
    pub purchase_count: usize,
    pub total_spent: i64,
}

/// Trims and checks the `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> Result<String, DomainError> {
    let email = raw.trim();
    let invalid = || DomainError::Validation(format!("'{}' is not a valid email address", email));

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);

    if well_formed {
        Ok(email.to_string())
    } else {
        Err(invalid())
    }
}

/// Replaces the stored email. A blank value clears it.
pub async fn update_email(
    users: &dyn UserRepository,
    user: &AuthUser,
    email: &str,
) -> Result<User, DomainError> {
    let email = if email.trim().is_empty() {
        None
    } else {
        Some(validate_email(email)?)
    };

    let updated = users.update_email(user.id, email).await?;
    tracing::info!(user = %user.username, "Email updated");
    Ok(updated)
}

/// Validates the checkout email against the stored one without writing.
/// Returns the address to store, or `None` when it is already current.
pub async fn pending_email(
    users: &dyn UserRepository,
    user: &AuthUser,
    email: &str,
) -> Result<Option<String>, DomainError> {
    let email = validate_email(email)?;
    let current = users
        .find_by_id(user.id)
        .await?
        .ok_or(DomainError::NotFound)?;

    if current.email.as_deref() == Some(email.as_str()) {
        Ok(None)
    } else {
        Ok(Some(email))
    }
}

/// Stores an email resolved by [`pending_email`]. Returns whether anything changed.
pub async fn sync_email(
    users: &dyn UserRepository,
    user: &AuthUser,
    pending: Option<String>,
) -> Result<bool, DomainError> {
    let Some(email) = pending else {
        return Ok(false);
    };

    users.update_email(user.id, Some(email)).await?;
    tracing::info!(user = %user.username, "Email updated at checkout");
    Ok(true)
}

pub async fn profile(
    users: &dyn UserRepository,
    sales: &dyn SaleRepository,
    user: &AuthUser,
) -> Result<Profile, DomainError> {
    let account = users
        .find_by_id(user.id)
        .await?
        .ok_or(DomainError::NotFound)?;
    let purchases = sales.history(user.id).await?;

    Ok(Profile {
        user: account,
        purchase_count: purchases.len(),
        total_spent: purchases.iter().map(|p| i64::from(p.unit_price)).sum(),
        purchases,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(" anna@example.ru ").unwrap(), "anna@example.ru");
        assert!(validate_email("anna").is_err());
        assert!(validate_email("@example.ru").is_err());
        assert!(validate_email("anna@localhost").is_err());
        assert!(validate_email("an na@example.ru").is_err());
        assert!(validate_email("anna@@example.ru").is_err());
    }
}

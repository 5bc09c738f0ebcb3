use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use contracts::system::auth::AdminInfo;
use rand::RngCore;
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use super::{repository, reset_repository};
use crate::shared::error::{AppError, AppResult};
use crate::system::auth::password;
use crate::system::auth::reset_notifier::ResetNotifier;

const RESET_TOKEN_LIFETIME_HOURS: i64 = 1;

pub async fn create(
    db: &DatabaseConnection,
    email: &str,
    plain_password: &str,
    full_name: Option<String>,
) -> AppResult<AdminInfo> {
    if !email.contains('@') {
        return Err(AppError::Validation("Invalid email format".into()));
    }
    password::validate_password_strength(plain_password)?;
    if repository::get_by_email(db, email).await?.is_some() {
        return Err(AppError::Validation("An admin with this email already exists".into()));
    }

    let hash = password::hash_password(plain_password)?;
    let admin = repository::insert(db, email, hash, full_name).await?;
    Ok(admin.into())
}

/// Checks a login attempt. Unknown email and wrong password are told apart.
pub async fn verify_credentials(db: &DatabaseConnection, email: &str, plain_password: &str) -> AppResult<AdminInfo> {
    let admin = repository::get_by_email(db, email)
        .await?
        .ok_or(AppError::EmailNotFound)?;

    if !password::verify_password(plain_password, &admin.password_hash) {
        tracing::info!("Failed login for admin {}", admin.id);
        return Err(AppError::PasswordMismatch);
    }

    let admin = repository::touch_last_login(db, admin).await?;
    tracing::info!("Admin {} logged in", admin.id);
    Ok(admin.into())
}

pub async fn get_info(db: &DatabaseConnection, id: i64) -> AppResult<AdminInfo> {
    repository::get_by_id(db, id)
        .await?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound(format!("Admin {}", id)))
}

/// Issues a one-time reset token. Unknown emails are accepted silently.
pub async fn request_password_reset(
    db: &DatabaseConnection,
    email: &str,
    notifier: &dyn ResetNotifier,
) -> AppResult<()> {
    let Some(admin) = repository::get_by_email(db, email).await? else {
        tracing::debug!("Password reset requested for unknown email");
        return Ok(());
    };

    let token = generate_reset_token();
    let expires_at = Utc::now() + chrono::Duration::hours(RESET_TOKEN_LIFETIME_HOURS);
    reset_repository::insert(db, admin.id, hash_token(&token), expires_at).await?;
    notifier.send_reset_token(&admin.email, &token).await?;
    Ok(())
}

pub async fn confirm_password_reset(db: &DatabaseConnection, token: &str, new_password: &str) -> AppResult<()> {
    password::validate_password_strength(new_password)?;

    let invalid = || AppError::Validation("Reset token is invalid or expired".into());
    let reset = reset_repository::find_unused(db, &hash_token(token.trim()))
        .await?
        .ok_or_else(invalid)?;
    if reset.expires_at <= Utc::now() {
        return Err(invalid());
    }
    let admin = repository::get_by_id(db, reset.admin_id)
        .await?
        .ok_or_else(invalid)?;

    let admin_id = admin.id;
    repository::set_password_hash(db, admin, password::hash_password(new_password)?).await?;
    reset_repository::mark_used(db, reset).await?;
    tracing::info!("Password of admin {} was reset", admin_id);
    Ok(())
}

fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::shared::data::db::connect_in_memory;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ResetNotifier for RecordingNotifier {
        async fn send_reset_token(&self, email: &str, token: &str) -> anyhow::Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((email.to_string(), token.to_string()));
            Ok(())
        }
    }

    async fn seeded() -> DatabaseConnection {
        let db = connect_in_memory(false).await;
        create(&db, "Manager@XtremePlay.sa", "Abcd1234@", Some("Manager".into()))
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn correct_credentials_log_in() {
        let db = seeded().await;
        let admin = verify_credentials(&db, " manager@xtremeplay.sa ", "Abcd1234@").await.unwrap();
        assert_eq!(admin.email, "manager@xtremeplay.sa");

        let stored = repository::get_by_id(&db, admin.id).await.unwrap().unwrap();
        assert!(stored.last_login_at.is_some());
    }

    #[tokio::test]
    async fn wrong_password_is_password_mismatch() {
        let db = seeded().await;
        let err = verify_credentials(&db, "manager@xtremeplay.sa", "nope-nope").await.unwrap_err();
        assert!(matches!(err, AppError::PasswordMismatch));
    }

    #[tokio::test]
    async fn unknown_email_is_email_not_found() {
        let db = seeded().await;
        let err = verify_credentials(&db, "someone@else.sa", "Abcd1234@").await.unwrap_err();
        assert!(matches!(err, AppError::EmailNotFound));
    }

    #[tokio::test]
    async fn duplicate_admin_is_rejected() {
        let db = seeded().await;
        let err = create(&db, "manager@xtremeplay.sa", "Other1234!", None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn reset_flow_changes_password_once() {
        let db = seeded().await;
        let notifier = RecordingNotifier::default();

        request_password_reset(&db, "manager@xtremeplay.sa", &notifier).await.unwrap();
        let (email, token) = notifier.sent.lock().unwrap()[0].clone();
        assert_eq!(email, "manager@xtremeplay.sa");

        confirm_password_reset(&db, &token, "NewSecret99").await.unwrap();
        assert!(verify_credentials(&db, &email, "NewSecret99").await.is_ok());
        assert!(matches!(
            verify_credentials(&db, &email, "Abcd1234@").await,
            Err(AppError::PasswordMismatch)
        ));

        // one-time token
        let err = confirm_password_reset(&db, &token, "Another999").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn reset_for_unknown_email_sends_nothing() {
        let db = seeded().await;
        let notifier = RecordingNotifier::default();
        request_password_reset(&db, "ghost@xtremeplay.sa", &notifier).await.unwrap();
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn expired_token_is_refused() {
        let db = seeded().await;
        let admin = repository::get_by_email(&db, "manager@xtremeplay.sa").await.unwrap().unwrap();
        let past = Utc::now() - chrono::Duration::minutes(5);
        reset_repository::insert(&db, admin.id, hash_token("stale"), past).await.unwrap();

        let err = confirm_password_reset(&db, "stale", "NewSecret99").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn short_new_password_is_refused() {
        let db = seeded().await;
        let err = confirm_password_reset(&db, "whatever", "short").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

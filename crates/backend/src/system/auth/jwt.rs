use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::{AdminInfo, TokenClaims};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::config::AuthConfig;
use crate::shared::error::{AppError, AppResult};

struct JwtSettings {
    secret: String,
    lifetime_hours: i64,
}

static SETTINGS: OnceCell<JwtSettings> = OnceCell::new();

/// Resolves the signing secret: the configured one, else the one kept in
/// sys_settings, else a freshly generated one that is stored for next start.
pub async fn initialize(db: &DatabaseConnection, auth: &AuthConfig) -> Result<()> {
    let secret = if auth.jwt_secret.trim().is_empty() {
        match get_jwt_secret_from_db(db).await? {
            Some(secret) => secret,
            None => {
                let secret = generate_jwt_secret();
                save_jwt_secret_to_db(db, &secret).await?;
                tracing::info!("Generated a new JWT secret");
                secret
            }
        }
    } else {
        auth.jwt_secret.clone()
    };

    SETTINGS
        .set(JwtSettings {
            secret,
            lifetime_hours: auth.token_lifetime_hours,
        })
        .map_err(|_| anyhow::anyhow!("JWT settings are already initialized"))
}

fn settings() -> AppResult<&'static JwtSettings> {
    SETTINGS
        .get()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("JWT settings have not been initialized")))
}

pub fn generate_access_token(admin: &AdminInfo) -> AppResult<String> {
    let settings = settings()?;
    Ok(encode_token(&settings.secret, admin, settings.lifetime_hours)?)
}

pub fn validate_token(token: &str) -> AppResult<TokenClaims> {
    let settings = settings()?;
    decode_token(&settings.secret, token).map_err(|e| {
        tracing::debug!("Rejected access token: {:#}", e);
        AppError::Unauthorized
    })
}

pub fn encode_token(secret: &str, admin: &AdminInfo, lifetime_hours: i64) -> Result<String> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: admin.id.to_string(),
        email: admin.email.clone(),
        exp: (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub fn decode_token(secret: &str, token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn get_jwt_secret_from_db(db: &DatabaseConnection) -> Result<Option<String>> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            ["jwt_secret".into()],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(db: &DatabaseConnection, secret: &str) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        [
            "jwt_secret".into(),
            secret.to_string().into(),
            "Auto-generated JWT secret for admin sessions".into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn admin() -> AdminInfo {
        AdminInfo {
            id: 7,
            email: "manager@xtremeplay.sa".into(),
            full_name: None,
        }
    }

    #[test]
    fn token_round_trip() {
        let token = encode_token("s3cret", &admin(), 24).unwrap();
        let claims = decode_token("s3cret", &token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "manager@xtremeplay.sa");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = encode_token("s3cret", &admin(), 24).unwrap();
        assert!(decode_token("other", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = encode_token("s3cret", &admin(), -2).unwrap();
        assert!(decode_token("s3cret", &token).is_err());
    }

    #[tokio::test]
    async fn generated_secret_is_stored_once() {
        let db = connect_in_memory(false).await;
        assert_eq!(get_jwt_secret_from_db(&db).await.unwrap(), None);

        let secret = generate_jwt_secret();
        save_jwt_secret_to_db(&db, &secret).await.unwrap();
        assert_eq!(get_jwt_secret_from_db(&db).await.unwrap(), Some(secret));
    }
}

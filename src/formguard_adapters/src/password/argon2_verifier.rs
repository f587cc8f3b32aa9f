use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier as _, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use formguard_core::{Password, PasswordVerifier, UserRecord};
use secrecy::{ExposeSecret, Secret};

use super::PasswordHashError;

/// Argon2id hashes in PHC string format.
///
/// Both hashing and verification are CPU heavy and run on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordVerifier;

impl Argon2PasswordVerifier {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(name = "Computing password hash", skip_all)]
    pub async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<Secret<String>, PasswordHashError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::from(h.to_string()))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| PasswordHashError(e.to_string()))?;

        result.map_err(PasswordHashError)
    }
}

#[async_trait]
impl PasswordVerifier for Argon2PasswordVerifier {
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn is_password_valid<U>(&self, user: &U, candidate: &Password) -> bool
    where
        U: UserRecord,
    {
        verify(user.password_hash().clone(), candidate.clone()).await
    }

    #[tracing::instrument(name = "Verify dummy password hash", skip_all)]
    async fn verify_without_user(&self, candidate: &Password) {
        verify(
            Secret::new(DUMMY_PASSWORD_HASH.to_string()),
            candidate.clone(),
        )
        .await;
    }
}

/// Well-formed hash with the same parameters as [`hasher`]. No password
/// matches it.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$Zm9ybWd1YXJkLWR1bW15IQ$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

async fn verify(expected_password_hash: Secret<String>, candidate: Password) -> bool {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            hasher()?
                .verify_password(
                    candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| e.to_string())
        })
    })
    .await;

    match result {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::debug!(error = %e, "Password verification failed");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "Password verification task failed");
            false
        }
    }
}

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use backend_domain::{AuthenticatedUser, Authenticator, UserId};

const TOKEN_PREFIX: &str = "playlab";
const TOKEN_VERSION: &str = "v1";

type HmacSha256 = Hmac<Sha256>;

/// Verifies `playlab.v1.<user_id>.<expires_unix>.<hex signature>` bearer
/// tokens issued by the auth service with a shared HMAC-SHA256 secret.
pub struct HmacTokenAuthenticator {
    secret: String,
}

impl HmacTokenAuthenticator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn verify_at(&self, token: &str, now_unix: i64) -> Option<AuthenticatedUser> {
        let parts: Vec<&str> = token.trim().split('.').collect();
        let [prefix, version, user_id, expires_at, signature] = parts.as_slice() else {
            debug!("token rejected: wrong segment count");
            return None;
        };
        if *prefix != TOKEN_PREFIX || *version != TOKEN_VERSION {
            debug!("token rejected: unknown prefix or version");
            return None;
        }
        let user_id: i64 = user_id.parse().ok().filter(|id| *id > 0)?;
        let expires_at: i64 = expires_at.parse().ok()?;
        if expires_at <= now_unix {
            debug!(user_id, "token rejected: expired");
            return None;
        }

        let expected = hex::decode(signature).ok()?;
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes()).ok()?;
        mac.update(signing_payload(UserId(user_id), expires_at).as_bytes());
        if mac.verify_slice(&expected).is_err() {
            debug!(user_id, "token rejected: bad signature");
            return None;
        }
        Some(AuthenticatedUser {
            id: UserId(user_id),
        })
    }
}

#[async_trait]
impl Authenticator for HmacTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<Option<AuthenticatedUser>> {
        Ok(self.verify_at(token, Utc::now().timestamp()))
    }
}

/// Produces a token the authenticator accepts. Issuing tokens belongs to the
/// auth service; this exists so both sides share one format.
pub fn sign_token(secret: &str, user_id: UserId, expires_at: i64) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|err| anyhow!("hmac init failed: {err}"))?;
    mac.update(signing_payload(user_id, expires_at).as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());
    Ok(format!(
        "{}.{}.{}.{}.{}",
        TOKEN_PREFIX, TOKEN_VERSION, user_id, expires_at, signature
    ))
}

fn signing_payload(user_id: UserId, expires_at: i64) -> String {
    format!("{}|{}|{}|{}", TOKEN_PREFIX, TOKEN_VERSION, user_id, expires_at)
}

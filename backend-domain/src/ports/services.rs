use async_trait::async_trait;
use chrono::NaiveDate;

use crate::value_objects::AuthenticatedUser;

/// Resolves a bearer token to a user. `Ok(None)` means the token was
/// rejected; `Err` means the collaborator itself failed.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> anyhow::Result<Option<AuthenticatedUser>>;
}

/// Source of the server's calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

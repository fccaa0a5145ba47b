//! # Session store
//!
//! [`SessionStore`] owns the bearer token and the identity decoded from it. It
//! keeps one invariant at all times: a [`SessionUser`] is present if and only
//! if a token is present, decodes, and has not expired.
//!
//! ## Lifecycle
//!
//! | Event | Effect |
//! |-------|--------|
//! | [`initialize`](SessionStore::initialize) | Reads the persisted token; if one exists it goes through `set_token`, so stale tokens are dropped on load. |
//! | [`set_token`](SessionStore::set_token) | Decodes and checks expiry. Valid: persists the token, attaches it to the API credential, sets the user. Invalid: `logout`. |
//! | [`logout`](SessionStore::logout) | Clears token and user, removes the persisted token, detaches the credential, and asks for a redirect to the posts listing. |
//! | [`refresh_at`](SessionStore::refresh_at) | Re-checks expiry of the held token; logs out once it has passed. |
//!
//! Persistence and credential attachment happen before `set_token` returns, so
//! a request built right afterwards already carries the token.
//!
//! ## Decoding
//!
//! Decoding is local: the second dot-separated segment of the token is read as
//! base64url JSON claims. The signature is not checked; the backend does that
//! on every request. Token problems are never shown to the user, they only end
//! the session (logged at `warn`).

use api::{Credential, Id};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::TokenStore;

use crate::guards::{Guard, GuardDecision, Redirect};

const CLAIMS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Identity carried in the token claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Id,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    /// Expiry, Unix seconds.
    pub exp: i64,
}

impl SessionUser {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Expired once the expiry instant is no longer in the future.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(at) => at <= now,
            None => true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has no claims segment")]
    Malformed,

    #[error("token claims are not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("token claims are not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),

    #[error("token expired at {0}")]
    Expired(i64),
}

/// Read the claims of `token` without checking expiry.
pub fn decode_claims(token: &str) -> Result<SessionUser, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::Malformed)?;
    let bytes = CLAIMS_ENGINE.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode `token` and require it to be unexpired at `now`.
pub fn validate_at(token: &str, now: DateTime<Utc>) -> Result<SessionUser, TokenError> {
    let user = decode_claims(token)?;
    if user.is_expired_at(now) {
        return Err(TokenError::Expired(user.exp));
    }
    Ok(user)
}

/// What a session transition asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    SignedIn,
    SignedOut { redirect: Redirect },
}

/// Token, decoded user, and the two places the token is mirrored to: the
/// persistent [`TokenStore`] and the API [`Credential`].
pub struct SessionStore<S> {
    token: Option<String>,
    user: Option<SessionUser>,
    storage: S,
    credential: Credential,
}

impl<S: TokenStore> SessionStore<S> {
    pub fn initialize(storage: S, credential: Credential) -> Self {
        Self::initialize_at(storage, credential, Utc::now())
    }

    pub fn initialize_at(storage: S, credential: Credential, now: DateTime<Utc>) -> Self {
        let mut session = Self {
            token: None,
            user: None,
            storage,
            credential,
        };
        if let Some(token) = session.storage.load() {
            session.set_token_at(token, now);
        }
        session
    }

    pub fn set_token(&mut self, token: impl Into<String>) -> SessionChange {
        self.set_token_at(token, Utc::now())
    }

    pub fn set_token_at(&mut self, token: impl Into<String>, now: DateTime<Utc>) -> SessionChange {
        let token = token.into();
        match validate_at(&token, now) {
            Ok(user) => {
                self.storage.save(&token);
                self.credential.attach(&token);
                tracing::info!("Signed in as {}", user.name);
                self.token = Some(token);
                self.user = Some(user);
                SessionChange::SignedIn
            }
            Err(e) => {
                tracing::warn!("Discarding session token: {}", e);
                self.logout()
            }
        }
    }

    pub fn logout(&mut self) -> SessionChange {
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.name);
        }
        self.token = None;
        self.storage.clear();
        self.credential.detach();
        SessionChange::SignedOut {
            redirect: Redirect::Posts,
        }
    }

    /// Log out if the held token has expired since it was accepted.
    pub fn refresh_at(&mut self, now: DateTime<Utc>) -> Option<SessionChange> {
        let expired = self.user.as_ref().is_some_and(|u| u.is_expired_at(now));
        if expired {
            tracing::warn!("Session token expired");
            Some(self.logout())
        } else {
            None
        }
    }
}

impl<S> SessionStore<S> {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn check(&self, guard: Guard) -> GuardDecision {
        guard.evaluate(self.token(), self.user())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use api::{ApiClient, Endpoint};
    use chrono::TimeZone;
    use store::MemoryStore;

    pub(crate) fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    /// Unsigned token with the given claims, shaped like the backend's.
    pub(crate) fn token_with(claims: serde_json::Value) -> String {
        let header = CLAIMS_ENGINE.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = CLAIMS_ENGINE.encode(claims.to_string());
        format!("{header}.{payload}.signature")
    }

    pub(crate) fn token_for(is_admin: bool, exp: i64) -> String {
        token_with(serde_json::json!({
            "id": 7,
            "name": "ana",
            "email": "ana@example.com",
            "isAdmin": is_admin,
            "exp": exp,
            "iat": exp - 3600,
        }))
    }

    fn valid_token() -> String {
        token_for(false, now().timestamp() + 3600)
    }

    fn expired_token() -> String {
        token_for(false, now().timestamp() - 1)
    }

    #[test]
    fn test_decode_claims() {
        let user = decode_claims(&token_for(true, 1_900_000_000)).unwrap();
        assert_eq!(user.id, Id::new("7"));
        assert_eq!(user.name, "ana");
        assert!(user.is_admin);
        assert_eq!(user.exp, 1_900_000_000);
    }

    #[test]
    fn test_decode_accepts_padded_payload() {
        let padded = base64::engine::general_purpose::URL_SAFE
            .encode(r#"{"id":"x","name":"n","email":"e@x.io","exp":1}"#);
        let token = format!("h.{padded}.s");
        assert!(decode_claims(&token).is_ok());
    }

    #[test]
    fn test_decode_failures() {
        assert!(matches!(decode_claims("no-dots"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a..c"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Encoding(_))));
        let not_json = format!("a.{}.c", CLAIMS_ENGINE.encode("plain text"));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Claims(_))));
    }

    #[test]
    fn test_expiry_boundary() {
        let at_now = token_for(false, now().timestamp());
        assert!(matches!(
            validate_at(&at_now, now()),
            Err(TokenError::Expired(_))
        ));
        assert!(validate_at(&valid_token(), now()).is_ok());
    }

    #[test]
    fn test_initialize_without_persisted_token_is_anonymous() {
        let session = SessionStore::initialize_at(MemoryStore::new(), Credential::new(), now());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(!session.credential().is_attached());
    }

    #[test]
    fn test_initialize_restores_persisted_token() {
        let storage = MemoryStore::with_token(valid_token());
        let session = SessionStore::initialize_at(storage, Credential::new(), now());
        assert!(session.is_authenticated());
        assert!(session.credential().is_attached());
    }

    #[test]
    fn test_initialize_drops_expired_persisted_token() {
        let storage = MemoryStore::with_token(expired_token());
        let session = SessionStore::initialize_at(storage.clone(), Credential::new(), now());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_set_token_persists_and_attaches_before_next_request() {
        let storage = MemoryStore::new();
        let credential = Credential::new();
        let client = ApiClient::new("http://api.test", credential.clone());
        let mut session = SessionStore::initialize_at(storage.clone(), credential, now());

        let token = valid_token();
        assert_eq!(session.set_token_at(token.clone(), now()), SessionChange::SignedIn);

        assert_eq!(storage.load().as_deref(), Some(token.as_str()));
        let request = client.build(&Endpoint::Comments).build().unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            token.as_str()
        );
    }

    #[test]
    fn test_invalid_token_forces_logout() {
        let storage = MemoryStore::new();
        let mut session = SessionStore::initialize_at(storage.clone(), Credential::new(), now());
        session.set_token_at(valid_token(), now());

        let change = session.set_token_at("garbage", now());
        assert_eq!(
            change,
            SessionChange::SignedOut {
                redirect: Redirect::Posts
            }
        );
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(storage.load().is_none());
        assert!(!session.credential().is_attached());
    }

    #[test]
    fn test_logout_clears_everything() {
        let storage = MemoryStore::new();
        let credential = Credential::new();
        let client = ApiClient::new("http://api.test", credential.clone());
        let mut session = SessionStore::initialize_at(storage.clone(), credential, now());
        session.set_token_at(valid_token(), now());

        let change = session.logout();
        assert_eq!(
            change,
            SessionChange::SignedOut {
                redirect: Redirect::Posts
            }
        );
        assert!(storage.load().is_none());
        assert!(session.user().is_none());
        let request = client.build(&Endpoint::Users).build().unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_user_present_iff_token_valid() {
        let cases = [
            (Some(valid_token()), true),
            (Some(expired_token()), false),
            (Some("a.b".to_string()), false),
            (None, false),
        ];
        for (token, expect_user) in cases {
            let mut session =
                SessionStore::initialize_at(MemoryStore::new(), Credential::new(), now());
            if let Some(t) = token {
                session.set_token_at(t, now());
            }
            assert_eq!(session.user().is_some(), expect_user);
            assert_eq!(session.token().is_some(), expect_user);
        }
    }

    #[test]
    fn test_refresh_detects_expiry() {
        let mut session = SessionStore::initialize_at(MemoryStore::new(), Credential::new(), now());
        session.set_token_at(valid_token(), now());
        assert!(session.refresh_at(now()).is_none());

        let later = now() + chrono::Duration::hours(2);
        assert!(session.refresh_at(later).is_some());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_check_uses_guards() {
        let mut session = SessionStore::initialize_at(MemoryStore::new(), Credential::new(), now());
        assert!(!session.check(Guard::AdminOnly).is_allowed());
        assert!(session.check(Guard::AnonymousOnly).is_allowed());

        session.set_token_at(token_for(true, now().timestamp() + 60), now());
        assert!(session.is_admin());
        assert!(session.check(Guard::AdminOnly).is_allowed());
        assert!(!session.check(Guard::AnonymousOnly).is_allowed());
    }
}

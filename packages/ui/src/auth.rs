//! Session context and hooks for the UI.

use api::{ApiClient, Credential};
use chrono::Utc;
use dioxus::prelude::*;
use store::BlogConfig;

use crate::guards::{Guard, GuardDecision, Redirect};
use crate::session::SessionStore;

/// Token persistence for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type Session = SessionStore<PlatformStore>;

fn platform_store(token_key: &str) -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::with_key(token_key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = token_key;
        store::MemoryStore::new()
    }
}

/// The session signal. Re-renders subscribers on sign-in and sign-out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The API client sharing the session's credential.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_config() -> BlogConfig {
    use_context::<BlogConfig>()
}

/// Evaluate `guard` against the current session.
///
/// A held token that expired since it was accepted is dropped on mount, which
/// re-renders the guarded page with the anonymous session.
pub fn use_guard(guard: Guard) -> GuardDecision {
    let mut session = use_session();

    use_effect(move || {
        let expired = session
            .peek()
            .user()
            .is_some_and(|u| u.is_expired_at(Utc::now()));
        if expired {
            session.write().refresh_at(Utc::now());
        }
    });

    let decision = session.read().check(guard);
    if let GuardDecision::Redirect(to) = decision {
        tracing::debug!("{:?} guard redirecting to {:?}", guard, to);
    }
    decision
}

/// Provider component that owns the session, the API client and the config.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(config: BlogConfig, children: Element) -> Element {
    let credential = use_hook(Credential::new);

    let session = use_signal({
        let credential = credential.clone();
        let token_key = config.session.token_key.clone();
        move || SessionStore::initialize(platform_store(&token_key), credential)
    });
    use_context_provider(|| session);

    use_context_provider({
        let base_url = config.api.base_url.clone();
        move || ApiClient::new(base_url, credential)
    });
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}

/// Button that ends the session. `on_signed_out` receives where to go next.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: EventHandler<Redirect>,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        if let crate::SessionChange::SignedOut { redirect } = session.write().logout() {
            on_signed_out.call(redirect);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

//! Session state management

use leptos::prelude::*;
use shared::session::{AuthSlot, SessionState, UserSummary};

use crate::services::identity;

/// Global session context, fed by the identity provider.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::SignedOut),
        }
    }

    pub fn slot(&self) -> AuthSlot {
        self.session.with(SessionState::slot)
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.session.with(|state| state.user().cloned())
    }

    pub fn set(&self, state: SessionState) {
        log::debug!("session changed: signed_in={}", state.is_signed_in());
        self.session.set(state);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the session context and start following the identity provider.
pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);

    leptos::task::spawn_local(async move {
        match identity::load().await {
            Ok(state) => {
                log::info!("identity provider loaded (signed_in={})", state.is_signed_in());
                context.set(state);
            }
            Err(e) => {
                log::warn!("identity provider unavailable: {}", e);
                return;
            }
        }

        let watched = identity::watch_session(move |update| match update {
            Ok(state) => context.set(state),
            Err(e) => log::warn!("ignoring session update: {}", e),
        });
        if let Err(e) = watched {
            log::warn!("cannot follow session changes: {}", e);
        }
    });

    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

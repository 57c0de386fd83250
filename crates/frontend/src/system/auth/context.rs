use contracts::shared::config::AppConfig;
use leptos::prelude::*;

use super::storage;
use crate::shared::config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub operator: Option<String>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.operator.is_some()
    }

    pub fn display_name(&self) -> String {
        self.operator.clone().unwrap_or_else(|| "Guest".to_string())
    }
}

/// Session provider: restores the operator name from localStorage on mount
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = RwSignal::new(SessionState {
        operator: storage::get_operator(),
    });

    provide_context(session);

    children()
}

/// Hook to access the session signal
pub fn use_session() -> RwSignal<SessionState> {
    use_context::<RwSignal<SessionState>>().expect("SessionProvider not found in component tree")
}

/// Store the operator name and the backend connection, then mark the session signed in.
///
/// The backend connection is validated before anything is written.
pub fn do_login(
    session: RwSignal<SessionState>,
    operator: &str,
    backend: &AppConfig,
) -> Result<(), String> {
    let operator = operator.trim();
    if operator.is_empty() {
        return Err("Operator name is required".to_string());
    }
    if backend.backend.url.trim().is_empty() {
        return Err("Backend URL is required".to_string());
    }

    config::save_config(backend)?;
    storage::save_operator(operator);
    log::info!("Signed in as {}", operator);

    session.set(SessionState {
        operator: Some(operator.to_string()),
    });
    Ok(())
}

/// Drop the operator name and return to the login page
pub fn do_logout(session: RwSignal<SessionState>) {
    storage::clear_operator();
    session.set(SessionState::default());
    log::info!("Signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_guest() {
        assert_eq!(SessionState::default().display_name(), "Guest");
        let s = SessionState {
            operator: Some("Ada".into()),
        };
        assert!(s.is_signed_in());
        assert_eq!(s.display_name(), "Ada");
    }
}

use contracts::system::auth::{LoginData, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(UserInfo::display_name)
            .unwrap_or_else(|| "User".to_string())
    }
}

/// Creates the auth signal from whatever session localStorage holds and
/// provides it to the tree.
pub fn provide_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let restored = AuthState {
        token: storage::get_token(),
        user: storage::get_user(),
    };
    if restored.is_authenticated() {
        log::info!("Restored session for {}", restored.display_name());
    }
    let (auth_state, set_auth_state) = signal(restored);

    provide_context(auth_state);
    provide_context(set_auth_state);

    (auth_state, set_auth_state)
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthState not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthState not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist a successful login and switch the shell to the main layout.
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, data: LoginData) {
    storage::save_token(&data.token);
    if let Some(user) = &data.user {
        storage::save_user(user);
    }
    set_auth_state.set(AuthState {
        token: Some(data.token),
        user: data.user,
    });
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back() {
        assert_eq!(AuthState::default().display_name(), "User");
        let state = AuthState {
            token: Some("t".into()),
            user: Some(UserInfo {
                email: Some("owner@shop.in".into()),
                ..Default::default()
            }),
        };
        assert!(state.is_authenticated());
        assert_eq!(state.display_name(), "owner@shop.in");
    }
}

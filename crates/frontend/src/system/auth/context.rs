use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session token from localStorage on mount.
    Effect::new(move |_| {
        if let Some(token) = storage::get_token() {
            set_auth_state.set(AuthState { token: Some(token) });
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

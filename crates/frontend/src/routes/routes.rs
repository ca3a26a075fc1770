use leptos::prelude::*;

use crate::domain::a002_collection::ui::list::CollectionsListPage;
use crate::system::auth::use_auth;

/// Top-level view selection.
///
/// The collections screen needs an API token for every call, so the page is
/// only rendered once the auth context has one.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let has_token = Signal::derive(move || auth_state.get().token.is_some());

    view! {
        <Show when=move || has_token.get() fallback=MissingTokenNotice>
            <CollectionsListPage />
        </Show>
    }
}

#[component]
fn MissingTokenNotice() -> impl IntoView {
    view! {
        <div class="page page--notice">
            <h2>"Not signed in"</h2>
            <p>"No API token found. Sign in first, then reload this page."</p>
        </div>
    }
}

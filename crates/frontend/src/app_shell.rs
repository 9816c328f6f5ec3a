//! Application shell: the root components under `App`.
//!
//! - `AppShell`: auth gate, shows `LoginPage` or `MainLayout`
//! - `MainLayout`: Shell + Sidebar + Tabs, plus the app-wide overlays

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::modal::ConfirmDialogHost;
use crate::shared::notify::Toaster;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("mounting tab '{}'", tab.key);
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
        <ConfirmDialogHost />
    }
}

/// Auth gate. Any request answered with 401 clears the token, which lands
/// the user back here on the login page.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
        <Toaster />
    }
}

use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::HttpClient;
use crate::shared::config::AppConfig;
use crate::shared::modal::ModalService;
use crate::shared::notify::NotificationService;
use crate::shared::ref_data::RefDataCache;
use crate::system::auth::context::provide_auth;
use leptos::prelude::*;

/// Root component. Every application-lifetime service is created here,
/// exactly once, and handed down through context.
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("API base: {}", config.api_base());

    let (auth_state, set_auth_state) = provide_auth();
    let notify = NotificationService::new(config.notification_timeout_ms);
    let http = HttpClient::new(config.api_base(), auth_state, set_auth_state);

    provide_context(AppGlobalContext::new());
    provide_context(ModalService::new());
    provide_context(notify);
    provide_context(http);
    provide_context(RefDataCache::new(http));
    provide_context(config);

    view! {
        <AppShell />
    }
}

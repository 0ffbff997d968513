use crate::routes::routes::AppRoutes;
use crate::shared::config::site_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Site texts and contacts for the whole app via context.
    provide_context(site_config().clone());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}

use crate::domain::a001_project::ui::details::ProjectDetailPage;
use crate::pages::landing::LandingPage;
use crate::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Маршруты сайта:
/// - `/` — главная (якоря `#portfolio`, `#about`, `#services`, `#contact`)
/// - `/project/:id` — страница проекта
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/project/:id") view=ProjectDetailPage />
            </Routes>
        </Router>
    }
}

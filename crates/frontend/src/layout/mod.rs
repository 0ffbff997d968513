pub mod footer;
pub mod header;

use footer::{Footer, FooterVariant};
use header::{Header, HeaderVariant};
use leptos::prelude::*;

/// Каркас страницы сайта.
///
/// ```text
/// +------------------------------+
/// |        Header (fixed)        |
/// +------------------------------+
/// |           content            |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(header: HeaderVariant, footer: FooterVariant, children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <Header variant=header />
            <main class="site-main">
                {children()}
            </main>
            <Footer variant=footer />
        </div>
    }
}

//! Placeholder shell for routes whose feature views live outside this crate.

use leptos::prelude::*;

use crate::routes::RouteName;

#[component]
pub fn SectionPage(name: RouteName) -> impl IntoView {
    let route = name.descriptor();
    view! {
        <section class="section-page">
            <h1>{route.title}</h1>
        </section>
    }
}

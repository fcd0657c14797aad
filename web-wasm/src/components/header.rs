//! ヘッダーコンポーネント

use crate::app::Page;
use leptos::prelude::*;
use lostfound_common::theme_icon;

#[component]
pub fn Header<FN, FT>(
    theme: ReadSignal<String>,
    page: ReadSignal<Page>,
    on_navigate: FN,
    on_toggle_theme: FT,
) -> impl IntoView
where
    FN: Fn(Page) + 'static + Clone + Send + Sync,
    FT: Fn() + 'static + Clone + Send + Sync,
{
    let nav_gallery = on_navigate.clone();
    let nav_submit = on_navigate.clone();

    view! {
        <header class="header">
            <h1>"🔍 Lost & Found"</h1>
            <nav class="nav">
                <button
                    class="nav-link"
                    class:active=move || page.get() == Page::Gallery
                    on:click=move |_| nav_gallery(Page::Gallery)
                >
                    "Gallery"
                </button>
                <button
                    class="nav-link"
                    class:active=move || page.get() == Page::Submit
                    on:click=move |_| nav_submit(Page::Submit)
                >
                    "Report Item"
                </button>
                <button
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| on_toggle_theme()
                >
                    <span class="theme-icon">{move || theme_icon(&theme.get())}</span>
                </button>
            </nav>
        </header>
    }
}

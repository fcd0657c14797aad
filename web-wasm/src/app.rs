//! メインアプリケーションコンポーネント
//!
//! ギャラリーと投稿フォームの2ページ構成。状態遷移はcommonの
//! `GalleryState`が持ち、ここではシグナル配線とAPI呼び出しだけを行う。

use crate::api::client;
use crate::components::{
    gallery::Gallery, header::Header, modal::ItemModal, search_bar::SearchBar,
    submit_form::SubmitForm, toast::Toast,
};
use crate::theme;
use chrono::{DateTime, Utc};
use leptos::prelude::*;
use lostfound_common::{next_theme, CardModel, GalleryState};
use wasm_bindgen_futures::spawn_local;

/// 表示中のページ
#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Gallery,
    Submit,
}

/// トースト表示時間（ミリ秒）
const TOAST_MS: u32 = 3_000;

/// 現在時刻。chronoのclock機能は使わずJSの時計を読む。
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (page, set_page) = signal(Page::Gallery);
    let (theme_name, set_theme_name) = signal(theme::init_theme());
    let (gallery, set_gallery) = signal(GalleryState::new());
    let (is_loading, set_is_loading) = signal(true);
    let (search_busy, set_search_busy) = signal(false);
    let (search_notice, set_search_notice) = signal(None::<String>);
    let (query, set_query) = signal(String::new());
    let (modal_item, set_modal_item) = signal(None::<CardModel>);
    let (toast, set_toast) = signal(None::<String>);

    // 描画計画は状態と現在時刻から導出する
    let plan = Memo::new(move |_| gallery.with(|g| g.render(now_utc())));
    let in_search_mode = Signal::derive(move || gallery.with(|g| g.is_searching()));

    let show_toast = move |message: String| {
        set_toast.set(Some(message));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            set_toast.set(None);
        });
    };

    // 一覧取得。失敗はログを残して空状態に倒す
    let reload_gallery = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match client::fetch_submissions().await {
                Ok(items) => set_gallery.update(|g| g.load(items)),
                Err(e) => {
                    leptos::logging::warn!("failed to load submissions: {}", e);
                    set_gallery.update(|g| g.load_failed());
                }
            }
            set_is_loading.set(false);
        });
    };

    // 初回表示ぶん
    reload_gallery();

    // 検索実行。実行中の再入と空クエリはここで弾く
    let run_search = move |raw_query: String| {
        let query_text = raw_query.trim().to_string();
        if query_text.is_empty() || search_busy.get_untracked() {
            return;
        }
        set_search_busy.set(true);
        set_search_notice.set(None);
        spawn_local(async move {
            match client::search_submissions(&query_text).await {
                Ok(response) => {
                    set_gallery.update(|g| g.enter_search(query_text, response));
                }
                Err(e) => {
                    leptos::logging::warn!("search failed: {}", e);
                    set_gallery.update(|g| g.search_failed());
                    set_search_notice.set(Some("Search failed. Please try again.".to_string()));
                }
            }
            set_search_busy.set(false);
        });
    };

    // 検索解除。保持している一覧へ戻すだけで再取得はしない
    let clear_search = move || {
        let mut restored = 0;
        set_gallery.update(|g| restored = g.clear_search());
        set_search_notice.set(None);
        set_query.set(String::new());
        if restored > 0 {
            show_toast(format!("Showing all {} items", restored));
        }
    };

    // APIが返した提案語で再検索
    let search_suggestion = move |term: String| {
        set_query.set(term.clone());
        run_search(term);
    };

    let on_card_click = move |card: CardModel| {
        set_modal_item.set(Some(card));
    };
    let close_modal = move || set_modal_item.set(None);

    let on_navigate = move |target: Page| {
        // ギャラリーは表示のたびに取り直す
        if target == Page::Gallery && page.get_untracked() != Page::Gallery {
            reload_gallery();
        }
        set_page.set(target);
    };

    let on_toggle_theme = move || {
        let next = next_theme(&theme_name.get_untracked()).to_string();
        theme::apply_theme(&next);
        set_theme_name.set(next);
    };

    view! {
        <div class="container">
            <Header
                theme=theme_name
                page=page
                on_navigate=on_navigate
                on_toggle_theme=on_toggle_theme
            />

            <Show
                when=move || page.get() == Page::Gallery
                fallback=|| view! { <SubmitForm /> }
            >
                <SearchBar
                    query=query
                    set_query=set_query
                    busy=search_busy
                    notice=search_notice
                    show_clear=in_search_mode
                    on_search=run_search
                    on_clear=clear_search
                />
                <Gallery
                    plan=plan
                    is_loading=is_loading
                    on_card_click=on_card_click
                    on_clear=clear_search
                    on_suggestion=search_suggestion
                />
            </Show>

            <ItemModal item=modal_item on_close=close_modal />
            <Toast message=toast />
        </div>
    }
}

//! 検索バーコンポーネント
//!
//! 入力途中の候補（クライアント側固定プール）と検索失敗の通知も
//! ここで出す。busy判定そのものはApp側のハンドラが持つ。

use leptos::prelude::*;
use lostfound_common::typing_suggestions;

#[component]
pub fn SearchBar<FS, FC>(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    busy: ReadSignal<bool>,
    notice: ReadSignal<Option<String>>,
    show_clear: Signal<bool>,
    on_search: FS,
    on_clear: FC,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn() + 'static + Clone + Send + Sync,
{
    let (show_suggestions, set_show_suggestions) = signal(false);
    let suggestions = Memo::new(move |_| typing_suggestions(&query.get()));

    let search_from_button = on_search.clone();
    let search_from_enter = on_search.clone();
    let search_from_suggestion = on_search.clone();

    view! {
        <div class="search-section">
            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search lost items... (e.g. black wallet)"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        set_query.set(event_target_value(&ev));
                        set_show_suggestions.set(true);
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            set_show_suggestions.set(false);
                            search_from_enter(query.get_untracked());
                        }
                    }
                />
                <button
                    class="btn btn-search"
                    disabled=move || busy.get()
                    on:click=move |_| {
                        set_show_suggestions.set(false);
                        search_from_button(query.get_untracked());
                    }
                >
                    {move || if busy.get() { "Searching..." } else { "Search" }}
                </button>
                <Show when=move || show_clear.get()>
                    <button
                        class="btn btn-clear"
                        on:click={
                            let on_clear = on_clear.clone();
                            move |_| on_clear()
                        }
                    >
                        "Clear search"
                    </button>
                </Show>
            </div>

            <Show when=move || show_suggestions.get() && !suggestions.get().is_empty()>
                <div class="search-suggestions">
                    {
                        let search_from_suggestion = search_from_suggestion.clone();
                        move || {
                            let search_from_suggestion = search_from_suggestion.clone();
                            suggestions
                                .get()
                                .into_iter()
                                .map(|term| {
                                    let search_from_suggestion = search_from_suggestion.clone();
                                    view! {
                                        <button
                                            class="suggestion-item"
                                            on:click=move |_| {
                                                set_query.set(term.to_string());
                                                set_show_suggestions.set(false);
                                                search_from_suggestion(term.to_string());
                                            }
                                        >
                                            {term}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </div>
            </Show>

            <Show when=move || notice.get().is_some()>
                <div class="search-notice">
                    {move || notice.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}

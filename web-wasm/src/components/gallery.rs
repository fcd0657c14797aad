//! ギャラリー表示コンポーネント
//!
//! `RenderPlan`をそのままDOMに適用する。どの計画を出すかの判断は
//! common側で済んでいるので、ここは各バリアントの見た目だけを持つ。
//! 再描画は常に全置換（カードにキーは付けない）。

use crate::components::item_card::ItemCard;
use leptos::prelude::*;
use lostfound_common::{CardModel, RenderPlan};

#[component]
pub fn Gallery<FC, FX, FS>(
    plan: Memo<RenderPlan>,
    is_loading: ReadSignal<bool>,
    on_card_click: FC,
    on_clear: FX,
    on_suggestion: FS,
) -> impl IntoView
where
    FC: Fn(CardModel) + 'static + Clone + Send + Sync,
    FX: Fn() + 'static + Clone + Send + Sync,
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <section class="gallery-section">
            <Show
                when=move || !is_loading.get()
                fallback=|| view! {
                    <div class="loading-message"><p>"Loading items..."</p></div>
                }
            >
                {
                    let on_card_click = on_card_click.clone();
                    let on_clear = on_clear.clone();
                    let on_suggestion = on_suggestion.clone();
                    move || match plan.get() {
                        RenderPlan::Empty => view! {
                            <div class="empty-message">
                                <p>"No items yet. Found something? Be the first to share it!"</p>
                            </div>
                        }
                        .into_any(),
                        RenderPlan::Listing { cards } => {
                            let on_card_click = on_card_click.clone();
                            view! {
                                <div class="gallery-grid">
                                    {card_views(cards, on_card_click)}
                                </div>
                            }
                            .into_any()
                        }
                        RenderPlan::SearchResults {
                            query,
                            total,
                            cards,
                            suggestions,
                        } => {
                            let on_card_click = on_card_click.clone();
                            let on_suggestion = on_suggestion.clone();
                            view! {
                                <div class="search-results">
                                    <div class="search-banner">
                                        <span class="result-count">
                                            {format!("{} item(s) found for \"{}\"", total, query)}
                                        </span>
                                        {suggestion_chips(suggestions, on_suggestion)}
                                    </div>
                                    <div class="gallery-grid">
                                        {card_views(cards, on_card_click)}
                                    </div>
                                </div>
                            }
                            .into_any()
                        }
                        RenderPlan::NoMatches { query } => {
                            let on_clear = on_clear.clone();
                            view! {
                                <div class="no-results">
                                    <p>{format!("No items found for \"{}\"", query)}</p>
                                    <button
                                        class="btn btn-secondary"
                                        on:click=move |_| on_clear()
                                    >
                                        "Show all items"
                                    </button>
                                </div>
                            }
                            .into_any()
                        }
                    }
                }
            </Show>
        </section>
    }
}

fn card_views<F>(cards: Vec<CardModel>, on_card_click: F) -> impl IntoView
where
    F: Fn(CardModel) + 'static + Clone + Send + Sync,
{
    cards
        .into_iter()
        .map(|card| {
            let on_card_click = on_card_click.clone();
            view! { <ItemCard card=card on_image_click=on_card_click /> }
        })
        .collect_view()
}

fn suggestion_chips<F>(suggestions: Vec<String>, on_suggestion: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    (!suggestions.is_empty()).then(|| {
        view! {
            <div class="suggestion-chips">
                <span class="chips-label">"Did you mean:"</span>
                {suggestions
                    .into_iter()
                    .map(|term| {
                        let on_suggestion = on_suggestion.clone();
                        let label = term.clone();
                        view! {
                            <button
                                class="chip"
                                on:click=move |_| on_suggestion(term.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}

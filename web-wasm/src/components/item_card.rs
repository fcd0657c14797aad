//! アイテムカードコンポーネント

use leptos::prelude::*;
use lostfound_common::CardModel;

#[component]
pub fn ItemCard<F>(card: CardModel, on_image_click: F) -> impl IntoView
where
    F: Fn(CardModel) + 'static + Clone + Send + Sync,
{
    let card_for_click = card.clone();

    // 画像がないカードはプレースホルダを出す。クリックできるのは画像だけ。
    let image_view = match card.image_src.clone() {
        Some(src) => view! {
            <img
                src=src
                alt="Item image"
                loading="lazy"
                on:click=move |_| on_image_click(card_for_click.clone())
            />
        }
        .into_any(),
        None => view! {
            <div class="no-image">
                <svg width="48" height="48" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <rect x="3" y="3" width="18" height="18" rx="2" ry="2" stroke="currentColor" stroke-width="2"/>
                    <circle cx="8.5" cy="8.5" r="1.5" stroke="currentColor" stroke-width="2"/>
                    <polyline points="21,15 16,10 5,21" stroke="currentColor" stroke-width="2"/>
                </svg>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="item-card">
            <div class="item-image">{image_view}</div>
            <div class="item-content">
                <div class="item-meta">
                    <span class="item-author">{card.author.clone()}</span>
                    <span class="item-date">{card.date_label.clone()}</span>
                    {card
                        .match_badge
                        .clone()
                        .map(|badge| view! { <span class="match-badge">{badge}</span> })}
                </div>
                {card
                    .description
                    .clone()
                    .map(|text| view! { <p class="item-description">{text}</p> })}
                {card
                    .match_reasons
                    .clone()
                    .map(|reasons| view! { <div class="match-reasons">{reasons}</div> })}
                {card
                    .contact
                    .clone()
                    .map(|contact| view! { <div class="item-contact">{format!("Contact: {}", contact)}</div> })}
                {card
                    .image_filename
                    .clone()
                    .map(|name| view! { <div class="item-filename">{name}</div> })}
            </div>
        </div>
    }
}

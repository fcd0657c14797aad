//! アイテム詳細モーダル
//!
//! カード画像クリックで開く。閉じるのはオーバーレイクリック、
//! ✕ボタン、Escapeの3通り。開いている間はbodyにmodal-openを
//! 付けてスクロールを止める。

use leptos::prelude::*;
use lostfound_common::CardModel;
use wasm_bindgen::prelude::*;

#[component]
pub fn ItemModal<F>(item: ReadSignal<Option<CardModel>>, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send + Sync,
{
    // Escapeで閉じる。モーダルはアプリと同寿命なのでリスナーは張りっぱなし。
    {
        let on_close = on_close.clone();
        let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" && item.get_untracked().is_some() {
                on_close();
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // 開閉に合わせてスクロールロックを切り替える
    Effect::new(move |_| {
        let open = item.get().is_some();
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            if open {
                let _ = class_list.add_1("modal-open");
            } else {
                let _ = class_list.remove_1("modal-open");
            }
        }
    });

    let close_from_overlay = on_close.clone();
    let close_from_button = on_close.clone();

    view! {
        <Show when=move || item.get().is_some()>
            <div
                class="modal-overlay"
                on:click={
                    let close_from_overlay = close_from_overlay.clone();
                    move |_| close_from_overlay()
                }
            >
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button
                        class="modal-close"
                        on:click={
                            let close_from_button = close_from_button.clone();
                            move |_| close_from_button()
                        }
                    >
                        "✕"
                    </button>
                    {move || {
                        item.get().map(|card| {
                            view! {
                                {card
                                    .image_src
                                    .clone()
                                    .map(|src| view! { <img class="modal-image" src=src alt="Item image" /> })}
                                <div class="modal-body">
                                    {card
                                        .description
                                        .clone()
                                        .map(|text| view! { <p class="modal-description">{text}</p> })}
                                    <p class="modal-attribution">
                                        {format!("{} • {}", card.author, card.date_label)}
                                    </p>
                                    {card
                                        .contact
                                        .clone()
                                        .map(|contact| view! {
                                            <p class="modal-contact">{format!("Contact: {}", contact)}</p>
                                        })}
                                </div>
                            }
                        })
                    }}
                </div>
            </div>
        </Show>
    }
}

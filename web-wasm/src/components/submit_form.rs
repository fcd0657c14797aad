//! 投稿フォームコンポーネント
//!
//! 画像の選択（クリックかドラッグ＆ドロップ）、検証、プレビュー、
//! multipart送信まで。説明文か画像のどちらかがあれば送信できる。

use crate::api::client;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lostfound_common::{can_submit, format_file_size, validate_image, Error};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, File, FileReader, FormData};

/// 成功メッセージの表示時間（ミリ秒）
const SUCCESS_MS: u32 = 5_000;

#[component]
pub fn SubmitForm() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    // (データURL, キャプション)
    let (preview, set_preview) = signal(None::<(String, String)>);
    let (has_image, set_has_image) = signal(false);
    let (is_dragover, set_is_dragover) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (show_success, set_show_success) = signal(false);

    // Fileは!Sendなのでシグナルには入れない。イベントハンドラと
    // spawn_localの中だけで触る。
    let selected_file: Rc<RefCell<Option<File>>> = Rc::new(RefCell::new(None));

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let submit_enabled = Memo::new(move |_| can_submit(&text.get(), has_image.get()));

    // 選択されたファイルを検証してプレビューを作る
    let handle_file = {
        let selected_file = Rc::clone(&selected_file);
        move |file: File| {
            if let Err(e) = validate_image(&file.type_(), file.size()) {
                alert(&e.to_string());
                return;
            }

            let caption = format!("{} ({})", file.name(), format_file_size(file.size()));
            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(_) => return,
            };
            let reader_for_load = reader.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
                if let Ok(result) = reader_for_load.result() {
                    if let Some(data_url) = result.as_string() {
                        set_preview.set(Some((data_url, caption.clone())));
                    }
                }
            }) as Box<dyn FnMut(_)>);
            reader.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            let _ = reader.read_as_data_url(&file);

            *selected_file.borrow_mut() = Some(file);
            set_has_image.set(true);
        }
    };

    let on_file_change = {
        let handle_file = handle_file.clone();
        move |_| {
            if let Some(input) = input_ref.get_untracked() {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    handle_file(file);
                }
            }
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let do_submit = {
        let selected_file = Rc::clone(&selected_file);
        move || {
            if is_submitting.get_untracked() || !submit_enabled.get_untracked() {
                return;
            }
            let form = match build_form_data(
                &text.get_untracked(),
                &name.get_untracked(),
                &contact.get_untracked(),
                selected_file.borrow().as_ref(),
            ) {
                Ok(form) => form,
                Err(e) => {
                    leptos::logging::error!("failed to build form data: {:?}", e);
                    return;
                }
            };
            set_is_submitting.set(true);

            let selected_file = Rc::clone(&selected_file);
            spawn_local(async move {
                match client::submit_item(&form).await {
                    Ok(()) => {
                        set_text.set(String::new());
                        set_name.set(String::new());
                        set_contact.set(String::new());
                        set_preview.set(None);
                        *selected_file.borrow_mut() = None;
                        set_has_image.set(false);
                        if let Some(input) = input_ref.get_untracked() {
                            input.set_value("");
                        }
                        set_is_submitting.set(false);

                        // 成功メッセージを5秒出してフォームへ戻す
                        set_show_success.set(true);
                        TimeoutFuture::new(SUCCESS_MS).await;
                        set_show_success.set(false);
                    }
                    Err(Error::Application(detail)) => {
                        alert(&detail);
                        set_is_submitting.set(false);
                    }
                    Err(e) => {
                        leptos::logging::warn!("submit failed: {}", e);
                        alert("Failed to submit. Please try again.");
                        set_is_submitting.set(false);
                    }
                }
            });
        }
    };

    let submit_from_form = do_submit.clone();
    let submit_from_keys = do_submit.clone();

    view! {
        <section class="submit-section">
            <div class="success-message" class:hidden=move || !show_success.get()>
                <div class="success-icon">"✅"</div>
                <h3>"Thank you!"</h3>
                <p>"Your item has been submitted."</p>
            </div>

            <form
                class="submit-form"
                class:hidden=move || show_success.get()
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit_from_form();
                }
                on:keydown=move |ev| {
                    // Ctrl/Cmd + Enterで送信
                    if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "Enter" {
                        ev.prevent_default();
                        submit_from_keys();
                    }
                }
            >
                <div class="form-group">
                    <label
                        class="file-label"
                        class:dragover=move || is_dragover.get()
                        on:dragover=on_dragover
                        on:dragleave=on_dragleave
                        on:drop=on_drop
                    >
                        <input
                            type="file"
                            class="file-input"
                            accept="image/*"
                            node_ref=input_ref
                            on:change=on_file_change
                        />
                        <div class="upload-icon">"📷"</div>
                        <p>"Drag & drop a photo here, or click to browse"</p>
                        <p class="text-muted">"Images up to 10MB"</p>
                    </label>
                    <Show when=move || preview.get().is_some()>
                        <div class="image-preview">
                            <img
                                src=move || preview.get().map(|(url, _)| url).unwrap_or_default()
                                alt="Preview"
                            />
                            <div class="preview-caption">
                                {move || preview.get().map(|(_, caption)| caption).unwrap_or_default()}
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="form-group">
                    <label for="item-text">"What did you find?"</label>
                    <textarea
                        id="item-text"
                        placeholder="Describe the item and where you found it..."
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="item-name">"Your name (optional)"</label>
                    <input
                        type="text"
                        id="item-name"
                        placeholder="Anonymous"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="item-contact">"Contact info (optional)"</label>
                    <input
                        type="text"
                        id="item-contact"
                        placeholder="Email or phone so the owner can reach you"
                        prop:value=move || contact.get()
                        on:input=move |ev| set_contact.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-submit"
                    disabled=move || is_submitting.get() || !submit_enabled.get()
                >
                    {move || if is_submitting.get() { "Submitting..." } else { "Submit Item" }}
                </button>
            </form>
        </section>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// new Date().toISOString()相当
fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

fn build_form_data(
    text: &str,
    name: &str,
    contact: &str,
    file: Option<&File>,
) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str("text", text)?;
    form.append_with_str("name", name)?;
    form.append_with_str("contact", contact)?;
    form.append_with_str("timestamp", &now_iso())?;
    if let Some(file) = file {
        form.append_with_blob_and_filename("image", file, &file.name())?;
    }
    Ok(form)
}

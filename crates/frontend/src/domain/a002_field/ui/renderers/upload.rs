//! File and image upload with local preview and simulated progress.
//!
//! Nothing is sent to the backend: the control checks the file on the
//! client, shows an object-URL preview and reports the file name.

use super::frame::{FieldChrome, FieldFrame};
use crate::shared::icons::icon;
use crate::shared::timers::Ticker;
use contracts::domain::a002_field::FieldValue;
use contracts::shared::input::upload::{format_size, PROGRESS_TICK_MS};
use contracts::shared::input::{check_upload, UploadProgress};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement, Url};

fn revoke(url: Option<String>) {
    if let Some(url) = url {
        let _ = Url::revoke_object_url(&url);
    }
}

#[component]
pub fn UploadInput(
    chrome: FieldChrome,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
    /// Only `image/*` files, with a thumbnail preview
    #[prop(optional)]
    image_only: bool,
    #[prop(optional)]
    accept: Option<String>,
    #[prop(optional)]
    max_size_mb: Option<f64>,
) -> impl IntoView {
    let preview = RwSignal::new(None::<String>);
    let size = RwSignal::new(None::<f64>);
    let upload_error = RwSignal::new(None::<String>);
    let progress = RwSignal::new(UploadProgress::default());
    let dragging = RwSignal::new(false);
    let ticker = Ticker::new();

    // The interval is never stopped from its own tick
    Effect::new(move |_| {
        if !progress.with(UploadProgress::is_active) {
            ticker.stop();
        }
    });

    on_cleanup(move || {
        revoke(preview.try_get_untracked().flatten());
    });

    let accept_attr = accept
        .clone()
        .or_else(|| image_only.then(|| "image/*".to_string()));
    let accept = StoredValue::new(accept);
    let read_only = chrome.advanced.read_only;

    let take_file = move |file: File| {
        let checked = accept.with_value(|a| {
            check_upload(
                image_only,
                a.as_deref(),
                &file.name(),
                &file.type_(),
                file.size(),
                max_size_mb,
            )
        });
        if let Err(e) = checked {
            upload_error.set(Some(e.to_string()));
            return;
        }
        upload_error.set(None);

        let url = if file.type_().starts_with("image/") {
            Url::create_object_url_with_blob(&file).ok()
        } else {
            None
        };
        revoke(preview.get_untracked());
        preview.set(url);
        size.set(Some(file.size()));

        progress.set(UploadProgress::start());
        ticker.start(PROGRESS_TICK_MS, move || {
            progress.try_update(|p| {
                p.tick();
            });
        });

        on_change.run(FieldValue::Text(file.name()));
    };

    let remove = move |_| {
        ticker.stop();
        revoke(preview.get_untracked());
        preview.set(None);
        size.set(None);
        upload_error.set(None);
        progress.set(UploadProgress::default());
        on_change.run(FieldValue::Text(String::new()));
    };

    let file_name = move || value.with(FieldValue::as_text);
    let has_file = move || !file_name().is_empty();
    let aria = chrome.aria_attrs();
    let input_id = chrome.id.clone();

    // Local upload errors take the place of the help line
    let frame_error = {
        let field_error = chrome.error;
        Signal::derive(move || upload_error.get().or_else(|| field_error.get()))
    };
    let frame = FieldChrome {
        error: frame_error,
        ..chrome.clone()
    };

    view! {
        <FieldFrame chrome=frame>
            <div class="cms-upload" class:cms-upload--image=image_only>
                <Show
                    when=has_file
                    fallback=move || {
                        let input_id = input_id.clone();
                        let accept_attr = accept_attr.clone();
                        let aria = aria.clone();
                        view! {
                            <label
                                for=input_id.clone()
                                class="cms-upload__dropzone"
                                class:cms-upload__dropzone--active=move || dragging.get()
                                on:dragover=move |ev| {
                                    ev.prevent_default();
                                    dragging.set(true);
                                }
                                on:dragleave=move |_| dragging.set(false)
                                on:drop=move |ev| {
                                    ev.prevent_default();
                                    dragging.set(false);
                                    if read_only {
                                        return;
                                    }
                                    if let Some(file) = ev
                                        .data_transfer()
                                        .and_then(|dt| dt.files())
                                        .and_then(|files| files.get(0))
                                    {
                                        take_file(file);
                                    }
                                }
                            >
                                {icon(if image_only { "image" } else { "upload" })}
                                <span>{if image_only { "Click or drop an image" } else { "Click or drop a file" }}</span>
                                {max_size_mb.map(|mb| view! {
                                    <span class="cms-upload__limit">{format!("Max {} MB", mb)}</span>
                                })}
                            </label>
                            <input
                                type="file"
                                id=input_id
                                class="cms-upload__input"
                                accept=accept_attr
                                disabled=read_only
                                aria-required=aria.required
                                aria-describedby=aria.described_by
                                aria-label=aria.label
                                aria-invalid=aria.invalid
                                on:change=move |ev| {
                                    let input = ev
                                        .target()
                                        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
                                    if let Some(input) = input {
                                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                            take_file(file);
                                        }
                                        input.set_value("");
                                    }
                                }
                            />
                        }
                    }
                >
                    <div class="cms-upload__file">
                        {move || preview.get().map(|src| view! {
                            <img class="cms-upload__thumb" src=src alt=file_name() />
                        })}
                        <div class="cms-upload__meta">
                            <span class="cms-upload__name">{file_name}</span>
                            <span class="cms-upload__size">
                                {move || size.get().map(format_size).unwrap_or_default()}
                            </span>
                            <Show when=move || progress.with(UploadProgress::is_active)>
                                <div class="cms-upload__progress" role="progressbar"
                                    aria-valuemin="0" aria-valuemax="100"
                                    aria-valuenow=move || progress.get().percent().to_string()>
                                    <div
                                        class="cms-upload__bar"
                                        style=move || format!("width: {}%;", progress.get().percent())
                                    ></div>
                                </div>
                            </Show>
                        </div>
                        <button
                            type="button"
                            class="cms-field__icon-btn"
                            title="Remove file"
                            disabled=read_only
                            on:click=remove
                        >
                            {icon("trash")}
                        </button>
                    </div>
                </Show>
            </div>
        </FieldFrame>
    }
}

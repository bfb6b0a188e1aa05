//! Portfolio Upload Component
//!
//! AJAX submission of the portfolio form. Multipart upload goes over
//! `XMLHttpRequest` because fetch-based clients expose no upload progress;
//! the modal walks through uploading → success/error, skipping the progress
//! bar in edit mode where only field changes are saved.

use leptos::prelude::*;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::models::UploadResponse;

#[derive(Clone, Debug, PartialEq)]
enum UploadPhase {
    Hidden,
    Uploading { percent: f64 },
    /// Edit mode: request in flight, no progress display
    Saving,
    Success { message: String, portfolio_id: Option<u32> },
    Failed { message: String },
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let edit_mode = dom::location_pathname().contains("/edit/");

    let (phase, set_phase) = signal(UploadPhase::Hidden);
    // Object URLs of the selected images, capped at 10
    let (previews, set_previews) = signal(Vec::<(String, String)>::new());
    let (extra_files, set_extra_files) = signal(0u32);
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_files_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };
        let total = files.length();
        let max_preview = total.min(10);
        let mut fresh = Vec::new();
        for index in 0..max_preview {
            let Some(file) = files.get(index) else {
                continue;
            };
            if !file.type_().starts_with("image/") {
                continue;
            }
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                fresh.push((url, file.name()));
            }
        }
        set_extra_files.set(total - max_preview);
        set_previews.update(|previews| {
            for (url, _) in previews.drain(..) {
                let _ = web_sys::Url::revoke_object_url(&url);
            }
            previews.extend(fresh);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        set_phase.set(if edit_mode {
            UploadPhase::Saving
        } else {
            UploadPhase::Uploading { percent: 0.0 }
        });

        let Ok(data) = web_sys::FormData::new_with_form(&form) else {
            set_phase.set(UploadPhase::Failed { message: "Ошибка чтения формы".to_string() });
            return;
        };
        let Ok(xhr) = web_sys::XmlHttpRequest::new() else {
            set_phase.set(UploadPhase::Failed { message: "Ошибка соединения с сервером".to_string() });
            return;
        };

        if !edit_mode {
            if let Ok(upload) = xhr.upload() {
                let on_progress =
                    Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |ev: web_sys::ProgressEvent| {
                        if ev.length_computable() {
                            let percent = ev.loaded() / ev.total() * 100.0;
                            set_phase.set(UploadPhase::Uploading { percent });
                        }
                    });
                upload.set_onprogress(Some(on_progress.as_ref().unchecked_ref()));
                on_progress.forget();
            }
        }

        let xhr_result = xhr.clone();
        let on_load = Closure::<dyn FnMut()>::new(move || {
            let status = xhr_result.status().unwrap_or(0);
            let body = xhr_result.response_text().ok().flatten().unwrap_or_default();
            match serde_json::from_str::<UploadResponse>(&body) {
                Ok(resp) if (200..300).contains(&status) && resp.status == "success" => {
                    let fallback = if edit_mode {
                        "Портфолио успешно обновлено!"
                    } else {
                        "Портфолио успешно загружено!"
                    };
                    set_phase.set(UploadPhase::Success {
                        message: resp.message.unwrap_or_else(|| fallback.to_string()),
                        portfolio_id: resp.portfolio_id,
                    });
                }
                Ok(resp) => {
                    set_phase.set(UploadPhase::Failed {
                        message: resp.message.unwrap_or_else(|| {
                            "Произошла ошибка при загрузке. Повторите, или обратитесь к администратору"
                                .to_string()
                        }),
                    });
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[UPLOAD] bad response: {err}").into());
                    set_phase.set(UploadPhase::Failed {
                        message: "Ошибка обработки ответа сервера".to_string(),
                    });
                }
            }
        });
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();

        let on_error = Closure::<dyn FnMut()>::new(move || {
            set_phase.set(UploadPhase::Failed { message: "Ошибка соединения с сервером".to_string() });
        });
        xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        // The form posts back to the page it was rendered on
        if xhr.open(&form.method(), &dom::location_href()).is_err()
            || xhr.set_request_header("X-Requested-With", "XMLHttpRequest").is_err()
            || xhr.send_with_opt_form_data(Some(&data)).is_err()
        {
            set_phase.set(UploadPhase::Failed { message: "Ошибка соединения с сервером".to_string() });
        }
    };

    view! {
        <form
            id="uploadProjectForm"
            class="upload-form"
            method="post"
            node_ref=form_ref
            on:submit=on_submit
        >
            <div class="form-group">
                <label for="id_title">"Название проекта"</label>
                <input id="id_title" type="text" name="title" required=true />
            </div>
            <div class="form-group">
                <label for="id_description">"Описание"</label>
                <textarea id="id_description" name="description"></textarea>
            </div>
            <div class="form-group field-images">
                <label for="id_files">"Изображения проекта"</label>
                <input
                    id="id_files"
                    type="file"
                    name="files"
                    multiple=true
                    accept="image/*"
                    on:change=on_files_change
                />
            </div>
            {move || {
                let previews = previews.get();
                (!previews.is_empty()).then(|| view! {
                    <div class="files-preview-container mt-3">
                        <p class="text-muted">
                            {format!("Выбрано файлов: {}", previews.len() as u32 + extra_files.get())}
                        </p>
                        <div class="files-preview-grid">
                            {previews.iter().map(|(url, name)| view! {
                                <div class="file-preview-item">
                                    <img class="img-thumbnail" src=url.clone() title=name.clone() />
                                </div>
                            }).collect_view()}
                        </div>
                        {(extra_files.get() > 0).then(|| view! {
                            <p class="text-muted mt-2">
                                {format!("... и еще {} файлов", extra_files.get())}
                            </p>
                        })}
                    </div>
                })
            }}
            <button type="submit" class="btn btn-primary">
                {if edit_mode { "Сохранить изменения" } else { "Загрузить портфолио" }}
            </button>
        </form>
        <ProgressModal phase=phase set_phase=set_phase edit_mode=edit_mode />
    }
}

/// Upload progress / result modal
#[component]
fn ProgressModal(
    phase: ReadSignal<UploadPhase>,
    set_phase: WriteSignal<UploadPhase>,
    edit_mode: bool,
) -> impl IntoView {
    let title = move || match phase.get() {
        UploadPhase::Uploading { .. } => "Загрузка портфолио...".to_string(),
        UploadPhase::Saving => "Сохранение изменений...".to_string(),
        UploadPhase::Success { .. } => {
            if edit_mode { "✓ Изменения сохранены!" } else { "✓ Загрузка завершена!" }.to_string()
        }
        UploadPhase::Failed { .. } => {
            if edit_mode { "Ошибка сохранения" } else { "Ошибка загрузки" }.to_string()
        }
        UploadPhase::Hidden => String::new(),
    };

    view! {
        {move || (phase.get() != UploadPhase::Hidden).then(|| view! {
            <div id="progressModal" class="modal show">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{title()}</h5>
                        </div>
                        <div class="modal-body">
                            {match phase.get() {
                                UploadPhase::Uploading { percent } => view! {
                                    <div class="progress">
                                        <div
                                            class="progress-bar progress-bar-animated"
                                            style=format!("width: {percent:.2}%")
                                            aria-valuenow=format!("{percent:.2}")
                                        >
                                            {format!("{percent:.0}%")}
                                        </div>
                                    </div>
                                }.into_any(),
                                UploadPhase::Saving => view! {
                                    <div class="modal-message text-center py-3">
                                        <span class="loader mb-3"></span>
                                        <p class="mb-0">"Сохранение изменений в портфолио"</p>
                                    </div>
                                }.into_any(),
                                UploadPhase::Success { message, .. } => view! {
                                    <div class="modal-message status-success p-3">
                                        <h3><strong>{message}</strong></h3>
                                    </div>
                                }.into_any(),
                                UploadPhase::Failed { message } => view! {
                                    <div class="modal-message status-danger">{message}</div>
                                }.into_any(),
                                UploadPhase::Hidden => ().into_any(),
                            }}
                        </div>
                        <div class="modal-footer">
                            {match phase.get() {
                                UploadPhase::Success { portfolio_id, .. } => view! {
                                    {portfolio_id.map(|id| view! {
                                        <a class="btn btn-primary w-100" href=format!("/portfolio/edit/{id}")>
                                            "Продолжить редактирование"
                                        </a>
                                    })}
                                    <a class="btn btn-secondary w-100" href="/portfolio/add/">
                                        "Добавить новое портфолио"
                                    </a>
                                    <a class="btn btn-secondary w-100" href="/account">
                                        "Перейти в свой профиль"
                                    </a>
                                }.into_any(),
                                _ => view! {
                                    <button
                                        type="button"
                                        class="btn btn-secondary"
                                        on:click=move |_| set_phase.set(UploadPhase::Hidden)
                                    >
                                        "Закрыть"
                                    </button>
                                }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            </div>
        })}
    }
}

//! Star Rating Component
//!
//! Rating form on the project detail page. Submission is gated client-side
//! (anonymous visitors, repeat votes, jury past the deadline) and by a
//! single in-flight request flag; the server response updates the average
//! and the personal score display.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::dom;
use crate::filters;
use crate::notify;

const STARS: u8 = 5;

/// Server-rendered widget state, read from the page by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingConfig {
    /// Rating endpoint of this project
    pub action: String,
    pub authenticated: bool,
    pub can_rate: bool,
    pub is_jury: bool,
    /// Jury voting closed but scores still displayed
    pub show_rating: bool,
    pub initial_score: Option<u8>,
    pub average: Option<f64>,
}

#[component]
pub fn RatingWidget(config: RatingConfig) -> impl IntoView {
    let RatingConfig {
        action,
        authenticated,
        can_rate,
        is_jury,
        show_rating,
        initial_score,
        average,
    } = config;
    let action = StoredValue::new(action);

    let (processing, set_processing) = signal(false);
    let (can_rate, set_can_rate) = signal(can_rate);
    let (user_score, set_user_score) = signal(initial_score);
    let (average, set_average) = signal(average);

    let send_rating = move |score: u8| {
        if processing.get_untracked() {
            return;
        }
        set_processing.set(true);
        spawn_local(async move {
            let score_value = score.to_string();
            let params = filters::serialize_params(&[("star", score_value.as_str())]);
            let url = dom::absolute_url(&action.get_value());
            match api::post_rating(&url, &params).await {
                Ok(data) => {
                    set_processing.set(false);
                    // Jury members may re-vote; everyone else is done.
                    if !data.is_jury {
                        set_can_rate.set(false);
                    }
                    set_user_score.set(Some(score));
                    if let Some(avg) = data.score_avg {
                        set_average.set(Some(avg));
                    }
                    let author = data.author.unwrap_or_else(|| "Автор".to_string());
                    let message = if data.is_jury {
                        format!(
                            "<h3>Оценка жюри установлена!</h3><p>\
                             Автор проекта: <b>\"{author}\"</b><br/>\
                             Ваша оценка: <b>{score}.0</b></p>"
                        )
                    } else {
                        format!(
                            "<h3>Рейтинг успешно установлен!</h3><p>\
                             Автор проекта: <b>\"{author}\"</b><br/>\
                             Ваша оценка: <b>{score}.0</b><br/>\
                             Общий рейтинг: <b>{:.1}</b></p>",
                            data.score_avg.unwrap_or(0.0)
                        )
                    };
                    notify::success(&message, 3000);
                }
                Err(err) => {
                    set_processing.set(false);
                    if err.contains("уже оценивали") {
                        set_can_rate.set(false);
                        notify::warning(&err, 3000);
                    } else {
                        web_sys::console::error_1(&format!("[RATE] {err}").into());
                        notify::error(&err, 5000);
                    }
                }
            }
        });
    };

    let submit_rating = move |score: u8| {
        if !can_rate.get_untracked() {
            if !authenticated {
                notify::warning(
                    "Участвовать в оценке могут только зарегистрированные пользователи",
                    3000,
                );
            } else if is_jury {
                let message = if show_rating {
                    "Голосование жюри завершено"
                } else {
                    "Срок голосования истек"
                };
                notify::warning(message, 3000);
            } else if let Some(prev) = user_score.get_untracked() {
                notify::warning(
                    &format!("Вы уже оценили эту работу. Ваша оценка: {prev}.0"),
                    3000,
                );
            }
            return;
        }
        send_rating(score);
    };

    view! {
        <form
            name="rating"
            class=move || if show_rating { "rating-form show-rating" } else { "rating-form" }
            on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()
        >
            <div class="stars d-flex">
                {(1..=STARS).map(|score| view! {
                    <label
                        class="star-label"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            submit_rating(score);
                        }
                    >
                        <input
                            type="radio"
                            name="star"
                            value=score.to_string()
                            prop:checked=move || user_score.get() == Some(score)
                        />
                        <svg class="rate-star"><use_ href="#star-icon"></use_></svg>
                    </label>
                }).collect_view()}
            </div>
            <div class="total-rating-block d-flex align-items-center">
                <span class="me-2">"Рейтинг:"</span>
                <b class="summary-score">
                    {move || average.get().map(|avg| format!("{avg:.1}")).unwrap_or_else(|| "—".to_string())}
                </b>
            </div>
            {move || user_score.get().map(|score| view! {
                <div class="personal-rating-block d-flex align-items-center mt-2">
                    <span class="me-2">"Ваша оценка:"</span>
                    <b>{format!("{score}.0")}</b>
                </div>
            })}
        </form>
    }
}

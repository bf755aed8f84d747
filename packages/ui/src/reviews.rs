use dioxus::prelude::*;
use store::reservation::display_date;
use store::{Review, ReviewWindow};

use crate::{use_api, use_async_resource, use_config, AsyncState, ErrorMessage, Spinner, StarRating};

/// Live reviews of one hotel, refetched when `hotel_id` changes.
#[component]
pub fn ReviewsSection(hotel_id: i64) -> Element {
    let client = use_api();

    let mut id_signal = use_signal(|| hotel_id);
    if *id_signal.peek() != hotel_id {
        id_signal.set(hotel_id);
    }

    let reviews = use_async_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move {
            client
                .list_reviews(id)
                .await
                .map_err(|e| e.user_message("Failed to load reviews"))
        }
    });

    rsx! {
        section {
            class: "reviews-section",
            {match reviews() {
                AsyncState::Success(list) => rsx! {
                    h2 { class: "section-title", "Reviews" }
                    ReviewsList { reviews: list }
                },
                AsyncState::Failure(message) => rsx! {
                    ErrorMessage { message }
                },
                _ => rsx! {
                    Spinner { small: true }
                },
            }}
        }
    }
}

/// Reviews revealed one page at a time.
#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> Element {
    let config = use_config();
    let mut window = use_signal(|| ReviewWindow::new(config.reviews.page_size));

    if reviews.is_empty() {
        return rsx! {
            p { class: "empty-state", "No reviews yet. Be the first to review!" }
        };
    }

    let shown = window().slice(&reviews).to_vec();
    let has_more = window().has_more(reviews.len());

    rsx! {
        div {
            class: "reviews-list",
            for review in shown {
                ReviewCard { key: "{review.id}", review: review.clone() }
            }
            if has_more {
                button {
                    class: "btn btn-link",
                    onclick: move |_| window.write().load_more(),
                    "Load more reviews"
                }
            }
        }
    }
}

#[component]
pub fn ReviewCard(review: Review) -> Element {
    let author = review.author_name();
    let date = review.created_at.as_deref().map(display_date);

    rsx! {
        div {
            class: "review-card",
            div {
                class: "review-header",
                div {
                    h3 { class: "review-author", "{author}" }
                    if let Some(date) = date {
                        p { class: "review-date", "{date}" }
                    }
                }
                StarRating { rating: review.filled_stars() as f64, show_label: false }
            }
            p { class: "review-comment", "{review.comment}" }
        }
    }
}

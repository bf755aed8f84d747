use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

/// Five stars, `floor(rating)` of them filled, optionally followed by the
/// rating with two decimals.
#[component]
pub fn StarRating(
    rating: f64,
    #[props(default = true)] show_label: bool,
    #[props(default = 16)] size: u32,
) -> Element {
    let filled = store::models::filled_stars(rating);
    let label = format!("{rating:.2}");
    let stars = (0..5usize).map(|i| star_class(i < filled));

    rsx! {
        div {
            class: "star-rating",
            for (index, class) in stars.enumerate() {
                span {
                    key: "{index}",
                    class: "{class}",
                    Icon { icon: FaStar, width: size, height: size }
                }
            }
            if show_label {
                span { class: "star-label", "({label})" }
            }
        }
    }
}

pub(crate) fn star_class(filled: bool) -> &'static str {
    if filled {
        "star star-filled"
    } else {
        "star"
    }
}

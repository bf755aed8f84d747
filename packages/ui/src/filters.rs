use dioxus::prelude::*;
use store::{City, ALL_CITIES};

/// Side panel with the city select, a min/max price pair and a reset button.
///
/// The panel is controlled: the owning view keeps the [`store::HotelFilter`]
/// and passes its current values down. An empty or unreadable price box
/// counts as `0`, the "no bound" sentinel.
#[component]
pub fn FiltersPanel(
    cities: Vec<City>,
    city: String,
    min_price: f64,
    max_price: f64,
    on_city: EventHandler<String>,
    on_price: EventHandler<(f64, f64)>,
    on_reset: EventHandler<()>,
) -> Element {
    let min_text = price_text(min_price);
    let max_text = price_text(max_price);

    rsx! {
        div {
            class: "filters-panel",
            h3 { class: "filters-title", "Filters" }

            div {
                class: "filters-group",
                label { class: "form-label", "City" }
                select {
                    class: "form-input",
                    value: "{city}",
                    onchange: move |evt| on_city.call(evt.value()),
                    option { value: ALL_CITIES, "{ALL_CITIES}" }
                    for c in cities {
                        option {
                            key: "{c.id}-{c.name}",
                            value: "{c.name}",
                            selected: c.name == city,
                            "{c.name}"
                        }
                    }
                }
            }

            div {
                class: "filters-group",
                label { class: "form-label", "Price Range" }
                div {
                    class: "filters-price",
                    input {
                        r#type: "number",
                        class: "form-input",
                        placeholder: "Min",
                        min: "0",
                        value: "{min_text}",
                        oninput: move |evt| on_price.call((parse_price(&evt.value()), max_price)),
                    }
                    input {
                        r#type: "number",
                        class: "form-input",
                        placeholder: "Max",
                        min: "0",
                        value: "{max_text}",
                        oninput: move |evt| on_price.call((min_price, parse_price(&evt.value()))),
                    }
                }
            }

            button {
                class: "btn btn-primary btn-block",
                onclick: move |_| on_reset.call(()),
                "Reset Filters"
            }
        }
    }
}

fn price_text(value: f64) -> String {
    if value > 0.0 {
        value.to_string()
    } else {
        String::new()
    }
}

fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

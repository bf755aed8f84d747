use dioxus::prelude::*;

/// The map always centres on the same point; hotels carry no coordinates.
const CENTER: (f64, f64) = (48.8566, 2.3522);
const SPAN: f64 = 0.02;

#[component]
pub fn LocationMap() -> Element {
    let src = embed_url(CENTER.0, CENTER.1);
    rsx! {
        div {
            class: "location-map",
            iframe {
                title: "Hotel location",
                src: "{src}",
                width: "100%",
                height: "300",
                "loading": "lazy",
            }
        }
    }
}

fn embed_url(lat: f64, lon: f64) -> String {
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={lat},{lon}",
        lon - SPAN,
        lat - SPAN,
        lon + SPAN,
        lat + SPAN,
    )
}

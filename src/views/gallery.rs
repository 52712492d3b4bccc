use dioxus::prelude::*;
use crate::utils::use_page_fx;

const TILES: [(&str, &str); 6] = [
    ("Theme", "Light and dark, remembered between visits."),
    ("Sidebar", "Slides in over the page below 992px."),
    ("Reveal", "Sections appear as they scroll into view."),
    ("Hover", "Cards lift while the pointer is over them."),
    ("Ripple", "Buttons answer clicks with a short wave."),
    ("Config", "Every selector and timing can be overridden."),
];

#[component]
pub fn Gallery() -> Element {
    use_page_fx();

    rsx! {
        div {
            class: "container grid",
            for (title, blurb) in TILES {
                div {
                    key: "{title}",
                    class: "card animate-on-scroll",
                    h3 { "{title}" }
                    p { "{blurb}" }
                    button { class: "btn btn-outline", "Try it" }
                }
            }
        }
    }
}

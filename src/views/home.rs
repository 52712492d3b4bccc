use dioxus::prelude::*;
use crate::utils::use_page_fx;

#[component]
pub fn Home() -> Element {
    use_page_fx();

    rsx! {
        div {
            class: "container",
            section {
                class: "card hero",
                h1 { "Page effects" }
                p {
                    "Switch themes from the top bar, open the menu on a narrow window, "
                    "and click any button to see the ripple."
                }
                div {
                    class: "actions",
                    button { class: "btn btn-primary", "Primary" }
                    button { class: "btn btn-outline", "Secondary" }
                }
            }
            for idx in 1..=6 {
                section {
                    key: "{idx}",
                    class: "card animate-on-scroll",
                    h2 { "Section {idx}" }
                    p { "Fades in once its top edge passes the reveal line." }
                }
            }
        }
    }
}

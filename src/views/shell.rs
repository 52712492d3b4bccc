use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::use_page_fx;

/// App chrome: collapsible sidebar, dimming overlay and the top bar toggles.
#[component]
pub fn Shell() -> Element {
    use_page_fx();

    rsx! {
        div {
            class: "app-shell",
            aside {
                class: "sidebar",
                div {
                    class: "sidebar-header",
                    span { class: "brand", "page_fx" }
                    button {
                        id: "sidebarClose",
                        class: "btn btn-icon",
                        "aria-label": "Close menu",
                        i { class: "bi bi-x-lg" }
                    }
                }
                nav {
                    class: "nav flex-column",
                    Link { class: "nav-link", to: Route::Home, "Home" }
                    Link { class: "nav-link", to: Route::Gallery, "Gallery" }
                }
            }
            div { class: "content-overlay" }
            main {
                class: "content",
                header {
                    class: "topbar",
                    button {
                        id: "sidebarOpen",
                        class: "btn btn-icon",
                        "aria-label": "Open menu",
                        i { class: "bi bi-list" }
                    }
                    button {
                        class: "btn btn-icon theme-toggle",
                        "aria-label": "Toggle theme",
                        i { class: "bi bi-moon-stars" }
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}

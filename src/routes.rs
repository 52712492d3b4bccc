use dioxus::prelude::*;
use crate::views::{ Gallery, Home, Shell };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home,
    #[route("/gallery")]
    Gallery,
}

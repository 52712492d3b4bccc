mod hooks;
mod theme;

pub use hooks::use_page_fx;
pub use theme::Theme;

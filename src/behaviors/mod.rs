pub mod binding;
pub mod element;
pub mod hover;
pub mod reveal;
pub mod ripple;
pub mod sidebar;
pub mod theme;

pub use binding::{ bind_marker, claim, Bindings, Connected };
pub use element::{ ClassTarget, Detachable, Positioned, Rect, RippleHost, Scheduler };
pub use ripple::{ ClickPoint, RippleGeometry };

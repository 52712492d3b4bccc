//! Browser bindings: `web_sys` implementations of the element seam and the
//! event wiring that drives each behavior.

mod element;
mod install;
mod scheduler;

pub use install::{
    boot,
    boot_with_config,
    bound_listeners,
    install,
    is_loading,
    release_detached,
    release_detached_later,
};
pub use scheduler::TimeoutScheduler;

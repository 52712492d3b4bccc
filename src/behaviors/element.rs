use crate::behaviors::ripple::RippleGeometry;
use crate::error::FxError;

/// The slice of an element every behavior needs: its class list and attributes.
pub trait ClassTarget {
    fn add_class(&self, class: &str) -> Result<(), FxError>;
    fn remove_class(&self, class: &str) -> Result<(), FxError>;
    fn has_class(&self, class: &str) -> bool;
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str) -> Result<(), FxError>;
    fn remove_attr(&self, name: &str) -> Result<(), FxError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Viewport-relative bounding box, as `getBoundingClientRect` reports it.
pub trait Positioned {
    fn bounding_rect(&self) -> Rect;
}

pub trait Detachable {
    fn detach(&self);
}

/// An element that can hold a transient ripple child.
pub trait RippleHost: ClassTarget + Positioned {
    type Child: Detachable + 'static;

    fn find_child(&self, class: &str) -> Option<Self::Child>;
    fn append_ripple(
        &self,
        class: &str,
        geometry: &RippleGeometry,
    ) -> Result<Self::Child, FxError>;
}

/// Runs a task once after a delay. The browser implementation never blocks.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

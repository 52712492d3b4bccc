use std::cell::{ Cell, RefCell };
use std::collections::{ BTreeMap, BTreeSet };
use std::rc::{ Rc, Weak };

use crate::behaviors::{ ClassTarget, Connected, Detachable, Positioned, Rect, RippleGeometry, RippleHost, Scheduler };
use crate::error::FxError;
use crate::store::PreferenceStore;
use crate::utils::Theme;

#[derive(Default)]
struct Node {
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    rect: Rect,
    children: Vec<FakeElement>,
    parent: Option<Weak<RefCell<Node>>>,
    removed: bool,
}

/// In-memory stand-in for a DOM element. Clones share the same node.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<Node>>);

#[allow(dead_code)]
impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rect(rect: Rect) -> Self {
        let element = Self::new();
        element.0.borrow_mut().rect = rect;
        element
    }

    pub fn with_top(top: f64) -> Self {
        Self::with_rect(Rect { left: 0.0, top, width: 200.0, height: 80.0 })
    }

    pub fn with_attr(name: &str, value: &str) -> Self {
        let element = Self::new();
        element.0.borrow_mut().attrs.insert(name.to_string(), value.to_string());
        element
    }

    pub fn move_to(&self, top: f64) {
        self.0.borrow_mut().rect.top = top;
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.borrow().children.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().style.get(property).cloned()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().parent.is_some()
    }

    /// Takes the element out of the page, as a re-render would.
    pub fn remove_from_page(&self) {
        self.0.borrow_mut().removed = true;
    }

    pub fn same_node(&self, other: &FakeElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ClassTarget for FakeElement {
    fn add_class(&self, class: &str) -> Result<(), FxError> {
        self.0.borrow_mut().classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), FxError> {
        self.0.borrow_mut().classes.remove(class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) -> Result<(), FxError> {
        self.0.borrow_mut().attrs.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attr(&self, name: &str) -> Result<(), FxError> {
        self.0.borrow_mut().attrs.remove(name);
        Ok(())
    }
}

impl Positioned for FakeElement {
    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }
}

impl Connected for FakeElement {
    fn in_document(&self) -> bool {
        !self.0.borrow().removed
    }
}

impl Detachable for FakeElement {
    fn detach(&self) {
        let parent = {
            let mut node = self.0.borrow_mut();
            node.removed = true;
            node.parent.take()
        };
        if let Some(parent) = parent.and_then(|p| p.upgrade()) {
            parent.borrow_mut().children.retain(|child| !Rc::ptr_eq(&child.0, &self.0));
        }
    }
}

impl RippleHost for FakeElement {
    type Child = FakeElement;

    fn find_child(&self, class: &str) -> Option<FakeElement> {
        self.0.borrow().children.iter().find(|child| child.has_class(class)).cloned()
    }

    fn append_ripple(&self, class: &str, geometry: &RippleGeometry) -> Result<FakeElement, FxError> {
        let child = FakeElement::new();
        {
            let mut node = child.0.borrow_mut();
            node.classes.insert(class.to_string());
            node.style.insert("width".to_string(), geometry.size_px());
            node.style.insert("height".to_string(), geometry.size_px());
            node.style.insert("left".to_string(), geometry.left_px());
            node.style.insert("top".to_string(), geometry.top_px());
            node.parent = Some(Rc::downgrade(&self.0));
        }
        self.0.borrow_mut().children.push(child.clone());
        Ok(child)
    }
}

/// Scheduler driven by hand: tasks run only when `advance` passes their deadline.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u32>,
    pending: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

#[allow(dead_code)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u32) {
        let target = self.now.get() + ms;
        self.now.set(target);
        let due: Vec<_> = {
            let mut pending = self.pending.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(at, _)| *at <= target);
            *pending = rest;
            due
        };
        for (_, task) in due {
            task();
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let at = self.now.get() + delay_ms;
        self.pending.borrow_mut().push((at, task));
    }
}

/// Storage that is present but refuses writes, like a full or blocked `localStorage`.
#[derive(Default)]
pub struct FailingStore {
    pub writes: Cell<u32>,
}

impl PreferenceStore for FailingStore {
    fn get_preference(&self) -> Option<Theme> {
        None
    }

    fn set_preference(&self, _theme: Theme) -> Result<(), FxError> {
        self.writes.set(self.writes.get() + 1);
        Err(FxError::Storage("quota exceeded".to_string()))
    }
}

/// Listener handle that counts how many times it has been dropped.
pub struct CountingHandle(pub Rc<Cell<u32>>);

impl Drop for CountingHandle {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

use crate::behaviors::element::ClassTarget;

/// Space-separated list of behaviors already wired to an element.
pub const BOUND_ATTRIBUTE: &str = "data-fx-bound";

/// Whether an element is still part of the rendered page.
pub trait Connected {
    fn in_document(&self) -> bool;
}

/// Next value of the bound marker once `behavior` is added, or `None` if it is
/// already listed.
pub fn bind_marker(bound: &str, behavior: &str) -> Option<String> {
    if bound.split_whitespace().any(|b| b == behavior) {
        return None;
    }
    if bound.trim().is_empty() {
        Some(behavior.to_string())
    } else {
        Some(format!("{} {}", bound.trim(), behavior))
    }
}

/// Marks `element` as wired for `behavior`; false if it already was, or if the
/// marker could not be written.
pub fn claim<E: ClassTarget>(element: &E, behavior: &str) -> bool {
    let bound = element.attr(BOUND_ATTRIBUTE).unwrap_or_default();
    match bind_marker(&bound, behavior) {
        Some(next) => element.set_attr(BOUND_ATTRIBUTE, &next).is_ok(),
        None => false,
    }
}

/// Listener handles paired with the element they serve. Dropping a handle
/// unbinds its listener.
pub struct Bindings<E, L> {
    entries: Vec<(Option<E>, L)>,
}

impl<E, L> Default for Bindings<E, L> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E: Connected, L> Bindings<E, L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `owner: None` keeps the handle for the life of the page.
    pub fn keep(&mut self, owner: Option<E>, handle: L) {
        self.entries.push((owner, handle));
    }

    /// Drops handles whose element has left the page. Returns how many went.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(owner, _)| owner.as_ref().map_or(true, |e| e.in_document()));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

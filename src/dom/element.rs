use wasm_bindgen::JsCast;
use web_sys::{ Element, HtmlElement, Node };

use crate::behaviors::{ ClassTarget, Connected, Detachable, Positioned, Rect, RippleGeometry, RippleHost };
use crate::error::FxError;

impl ClassTarget for Element {
    fn add_class(&self, class: &str) -> Result<(), FxError> {
        self.class_list().add_1(class)?;
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), FxError> {
        self.class_list().remove_1(class)?;
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) -> Result<(), FxError> {
        self.set_attribute(name, value)?;
        Ok(())
    }

    fn remove_attr(&self, name: &str) -> Result<(), FxError> {
        self.remove_attribute(name)?;
        Ok(())
    }
}

impl Positioned for Element {
    fn bounding_rect(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

impl Connected for Element {
    fn in_document(&self) -> bool {
        Node::is_connected(self)
    }
}

impl Detachable for Element {
    fn detach(&self) {
        self.remove();
    }
}

impl RippleHost for Element {
    type Child = Element;

    fn find_child(&self, class: &str) -> Option<Element> {
        self.query_selector(&format!(".{}", class)).ok().flatten()
    }

    fn append_ripple(&self, class: &str, geometry: &RippleGeometry) -> Result<Element, FxError> {
        let document = self
            .owner_document()
            .ok_or_else(|| FxError::MissingElement("owner document".to_string()))?;
        let span = document.create_element("span")?;
        span.class_list().add_1(class)?;

        let style = span
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| FxError::Dom("ripple span is not an HtmlElement".to_string()))?
            .style();
        let size = geometry.size_px();
        style.set_property("width", &size)?;
        style.set_property("height", &size)?;
        style.set_property("left", &geometry.left_px())?;
        style.set_property("top", &geometry.top_px())?;

        self.append_child(&span)?;
        Ok(span)
    }
}

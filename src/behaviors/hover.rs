use crate::behaviors::element::ClassTarget;
use crate::configs::HoverConfig;
use crate::error::FxError;

pub fn enter<E: ClassTarget>(card: &E, config: &HoverConfig) -> Result<(), FxError> {
    card.add_class(&config.hovered_class)
}

pub fn leave<E: ClassTarget>(card: &E, config: &HoverConfig) -> Result<(), FxError> {
    card.remove_class(&config.hovered_class)
}

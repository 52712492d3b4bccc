use crate::behaviors::element::{ ClassTarget, Positioned };
use crate::configs::RevealConfig;
use crate::error::FxError;

pub fn threshold(viewport_height: f64, ratio: f64) -> f64 {
    viewport_height / ratio
}

pub fn crosses(top: f64, threshold: f64) -> bool {
    top < threshold
}

/// Marks every element whose top edge is above the reveal line. Elements are
/// never hidden again once revealed. Returns how many were newly revealed.
pub fn reveal<E>(elements: &[E], viewport_height: f64, config: &RevealConfig) -> Result<usize, FxError>
    where E: ClassTarget + Positioned
{
    let line = threshold(viewport_height, config.ratio);
    let mut revealed = 0;
    for element in elements {
        if element.has_class(&config.visible_class) {
            continue;
        }
        if crosses(element.bounding_rect().top, line) {
            element.add_class(&config.visible_class)?;
            revealed += 1;
        }
    }
    if revealed > 0 {
        log::debug!("Revealed {} element(s) above {:.1}px", revealed, line);
    }
    Ok(revealed)
}

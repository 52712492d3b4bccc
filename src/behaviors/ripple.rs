use crate::behaviors::element::{ Detachable, Rect, RippleHost, Scheduler };
use crate::configs::RippleConfig;
use crate::error::FxError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// Square ripple centred on the click, relative to the button's box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl RippleGeometry {
    pub fn compute(rect: Rect, click: ClickPoint) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            x: click.client_x - rect.left - size / 2.0,
            y: click.client_y - rect.top - size / 2.0,
        }
    }

    pub fn size_px(&self) -> String {
        format!("{}px", self.size)
    }

    pub fn left_px(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top_px(&self) -> String {
        format!("{}px", self.y)
    }
}

/// Replaces any ripple still on `button` with a fresh one and schedules its removal.
pub fn spawn<H, S>(
    button: &H,
    click: ClickPoint,
    scheduler: &S,
    config: &RippleConfig
) -> Result<RippleGeometry, FxError>
    where H: RippleHost, S: Scheduler + ?Sized
{
    if let Some(existing) = button.find_child(&config.ripple_class) {
        existing.detach();
    }

    let geometry = RippleGeometry::compute(button.bounding_rect(), click);
    let ripple = button.append_ripple(&config.ripple_class, &geometry)?;
    scheduler.schedule(config.delay_ms, Box::new(move || ripple.detach()));
    Ok(geometry)
}

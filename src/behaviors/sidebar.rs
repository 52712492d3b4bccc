use crate::behaviors::element::ClassTarget;
use crate::configs::SidebarConfig;
use crate::error::FxError;

pub fn open<E: ClassTarget>(
    sidebar: Option<&E>,
    overlay: Option<&E>,
    config: &SidebarConfig
) -> Result<(), FxError> {
    if let Some(sidebar) = sidebar {
        sidebar.add_class(&config.open_class)?;
        sidebar.add_class(&config.slide_class)?;
    }
    if let Some(overlay) = overlay {
        overlay.add_class(&config.show_class)?;
    }
    Ok(())
}

pub fn close<E: ClassTarget>(
    sidebar: Option<&E>,
    overlay: Option<&E>,
    config: &SidebarConfig
) -> Result<(), FxError> {
    if let Some(sidebar) = sidebar {
        sidebar.remove_class(&config.open_class)?;
        sidebar.remove_class(&config.slide_class)?;
    }
    if let Some(overlay) = overlay {
        overlay.remove_class(&config.show_class)?;
    }
    Ok(())
}

pub fn is_open<E: ClassTarget>(sidebar: &E, config: &SidebarConfig) -> bool {
    sidebar.has_class(&config.open_class)
}

/// Nav links only dismiss the panel on narrow viewports, where it covers the page.
/// Returns whether anything was closed; a panel that is not open is left alone.
pub fn close_for_nav<E: ClassTarget>(
    viewport_width: f64,
    sidebar: Option<&E>,
    overlay: Option<&E>,
    config: &SidebarConfig
) -> Result<bool, FxError> {
    if viewport_width >= config.breakpoint {
        return Ok(false);
    }
    if sidebar.is_some_and(|panel| !is_open(panel, config)) {
        return Ok(false);
    }
    close(sidebar, overlay, config)?;
    Ok(true)
}

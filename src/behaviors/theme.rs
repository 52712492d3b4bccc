use crate::behaviors::binding::claim;
use crate::behaviors::element::{ ClassTarget, Scheduler };
use crate::configs::ThemeConfig;
use crate::error::FxError;
use crate::store::PreferenceStore;
use crate::utils::Theme;

/// Theme currently shown by `root`. Anything but the dark marker reads as light.
pub fn current<E: ClassTarget>(root: &E, config: &ThemeConfig) -> Theme {
    match root.attr(&config.attribute).as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

pub fn apply<E: ClassTarget>(root: &E, theme: Theme, config: &ThemeConfig) -> Result<(), FxError> {
    if theme.is_dark() {
        root.set_attr(&config.attribute, Theme::Dark.as_str())
    } else {
        root.remove_attr(&config.attribute)
    }
}

/// Applies the stored preference, falling back to light when nothing usable is stored.
pub fn restore<E, P>(root: &E, store: &P, config: &ThemeConfig) -> Result<Theme, FxError>
    where E: ClassTarget, P: PreferenceStore + ?Sized
{
    let theme = store.get_preference().unwrap_or_default();
    apply(root, theme, config)?;
    log::debug!("Restored {} theme", theme);
    Ok(theme)
}

/// Restores the stored preference the first time it is called for `root`.
///
/// Later calls leave the root alone and report the theme it already shows, so
/// a toggle that could not be saved survives the page re-rendering.
pub fn restore_once<E, P>(root: &E, store: &P, config: &ThemeConfig) -> Result<Theme, FxError>
    where E: ClassTarget, P: PreferenceStore + ?Sized
{
    if claim(root, "theme-restore") {
        restore(root, store, config)
    } else {
        Ok(current(root, config))
    }
}

/// Points every toggle icon at the theme the next click would switch to.
pub fn sync_icons<E: ClassTarget>(icons: &[E], theme: Theme) -> Result<(), FxError> {
    let class = format!("bi {}", theme.icon_class());
    for icon in icons {
        icon.set_attr("class", &class)?;
    }
    Ok(())
}

/// Flips the theme on `root`, persists it and plays the body transition.
///
/// A failed write to the store is logged, not returned: the page keeps the new
/// theme for this visit either way.
pub fn toggle<E, P, S>(
    root: &E,
    store: &P,
    icons: &[E],
    body: Option<E>,
    scheduler: &S,
    config: &ThemeConfig
) -> Result<Theme, FxError>
    where E: ClassTarget + 'static, P: PreferenceStore + ?Sized, S: Scheduler + ?Sized
{
    let next = current(root, config).toggled();
    apply(root, next, config)?;

    if let Err(e) = store.set_preference(next) {
        log::warn!("Theme preference not saved: {}", e);
    }

    sync_icons(icons, next)?;

    if let Some(body) = body {
        body.add_class(&config.transition_class)?;
        let class = config.transition_class.clone();
        scheduler.schedule(
            config.transition_ms,
            Box::new(move || {
                if let Err(e) = body.remove_class(&class) {
                    log::warn!("Failed to clear theme transition: {}", e);
                }
            })
        );
    }

    log::info!("Switched to {} theme", next);
    Ok(next)
}

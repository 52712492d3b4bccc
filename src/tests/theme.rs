use crate::behaviors::theme;
use crate::configs::ThemeConfig;
use crate::store::{ MemoryStore, PreferenceStore };
use crate::tests::common::{ setup, FailingStore, FakeElement, ManualScheduler };
use crate::utils::Theme;

fn marker(root: &FakeElement) -> Option<String> {
    use crate::behaviors::ClassTarget;
    root.attr("data-theme")
}

#[test]
fn stored_dark_marks_root_on_load() {
    setup();
    let root = FakeElement::new();
    let store = MemoryStore::new(Some(Theme::Dark));

    let applied = theme::restore(&root, &store, &ThemeConfig::default()).unwrap();

    assert_eq!(applied, Theme::Dark);
    assert_eq!(marker(&root).as_deref(), Some("dark"));
}

#[test]
fn nothing_stored_defaults_to_light() {
    let root = FakeElement::new();
    let store = MemoryStore::default();

    let applied = theme::restore(&root, &store, &ThemeConfig::default()).unwrap();

    assert_eq!(applied, Theme::Light);
    assert_eq!(marker(&root), None);
    assert_eq!(theme::current(&root, &ThemeConfig::default()), Theme::Light);
}

#[test]
fn stored_light_clears_a_stale_marker() {
    let root = FakeElement::with_attr("data-theme", "dark");
    let store = MemoryStore::new(Some(Theme::Light));

    theme::restore(&root, &store, &ThemeConfig::default()).unwrap();

    assert_eq!(marker(&root), None);
}

#[test]
fn unexpected_marker_value_reads_as_light() {
    let root = FakeElement::with_attr("data-theme", "sepia");
    assert_eq!(theme::current(&root, &ThemeConfig::default()), Theme::Light);
}

#[test]
fn toggling_twice_restores_marker_and_preference() {
    setup();
    let config = ThemeConfig::default();
    let root = FakeElement::new();
    let store = MemoryStore::default();
    let scheduler = ManualScheduler::new();

    let first = theme::toggle(&root, &store, &[], None, &scheduler, &config).unwrap();
    assert_eq!(first, Theme::Dark);
    assert_eq!(marker(&root).as_deref(), Some("dark"));
    assert_eq!(store.get_preference(), Some(Theme::Dark));

    let second = theme::toggle(&root, &store, &[], None, &scheduler, &config).unwrap();
    assert_eq!(second, Theme::Light);
    assert_eq!(marker(&root), None);
    assert_eq!(store.get_preference(), Some(Theme::Light));
}

#[test]
fn toggle_swaps_every_icon() {
    use crate::behaviors::ClassTarget;

    let config = ThemeConfig::default();
    let root = FakeElement::new();
    let store = MemoryStore::default();
    let icons = vec![
        FakeElement::with_attr("class", "bi bi-moon-stars"),
        FakeElement::with_attr("class", "bi bi-moon-stars"),
    ];

    theme::toggle(&root, &store, &icons, None, &ManualScheduler::new(), &config).unwrap();
    for icon in &icons {
        assert_eq!(icon.attr("class").as_deref(), Some("bi bi-sun"));
    }

    theme::toggle(&root, &store, &icons, None, &ManualScheduler::new(), &config).unwrap();
    for icon in &icons {
        assert_eq!(icon.attr("class").as_deref(), Some("bi bi-moon-stars"));
    }
}

#[test]
fn body_transition_class_is_cleared_after_its_delay() {
    use crate::behaviors::ClassTarget;

    let config = ThemeConfig::default();
    let root = FakeElement::new();
    let body = FakeElement::new();
    let scheduler = ManualScheduler::new();

    theme::toggle(&root, &MemoryStore::default(), &[], Some(body.clone()), &scheduler, &config).unwrap();
    assert!(body.has_class("theme-transition"));

    scheduler.advance(299);
    assert!(body.has_class("theme-transition"));

    scheduler.advance(1);
    assert!(!body.has_class("theme-transition"));
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn failed_save_still_switches_theme() {
    setup();
    let root = FakeElement::new();
    let store = FailingStore::default();

    let next = theme::toggle(&root, &store, &[], None, &ManualScheduler::new(), &ThemeConfig::default()).unwrap();

    assert_eq!(next, Theme::Dark);
    assert_eq!(marker(&root).as_deref(), Some("dark"));
    assert_eq!(store.writes.get(), 1);
}

#[test]
fn custom_attribute_name_is_honoured() {
    let config = ThemeConfig { attribute: "data-bs-theme".to_string(), ..ThemeConfig::default() };
    let root = FakeElement::new();

    theme::restore(&root, &MemoryStore::new(Some(Theme::Dark)), &config).unwrap();

    assert_eq!(marker(&root), None);
    assert_eq!(theme::current(&root, &config), Theme::Dark);
}

#[test]
fn restore_runs_once_per_root() {
    setup();
    let config = ThemeConfig::default();
    let root = FakeElement::new();
    let store = FailingStore::default();
    let scheduler = ManualScheduler::new();

    assert_eq!(theme::restore_once(&root, &store, &config).unwrap(), Theme::Light);
    theme::toggle(&root, &store, &[], None, &scheduler, &config).unwrap();

    // The save failed, so a second restore would bring light back.
    let shown = theme::restore_once(&root, &store, &config).unwrap();

    assert_eq!(shown, Theme::Dark);
    assert_eq!(theme::current(&root, &config), Theme::Dark);
}

#[test]
fn restore_once_applies_stored_preference_first_time() {
    let config = ThemeConfig::default();
    let root = FakeElement::new();

    let shown = theme::restore_once(&root, &MemoryStore::new(Some(Theme::Dark)), &config).unwrap();

    assert_eq!(shown, Theme::Dark);
    assert_eq!(marker(&root).as_deref(), Some("dark"));
}

use super::*;
use crate::navigation::{Navigation, Page, StateNavigator};
use crate::theme::{MemoryStorage, ThemeStore};

#[test]
fn re_exports_should_work() {
    let config = SiteConfig::default();
    assert_eq!("theme", config.theme_key);

    let err: Result<Page> = "blog".parse();
    assert!(matches!(err, Err(Error::UnknownPage(_))));
}

#[test]
fn theme_and_navigation_should_be_independent() {
    let store = ThemeStore::load(MemoryStorage::new());
    let mut nav = StateNavigator::new();

    nav.navigate(Page::Contact);
    store.toggle();
    nav.navigate_named("missing");

    assert_eq!(Page::Contact, nav.page());
    assert!(!store.get().is_dark);
}

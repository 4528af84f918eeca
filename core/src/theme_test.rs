use super::*;
use std::cell::Cell;

#[test]
fn store_should_default_to_dark() {
    let store = ThemeStore::load(MemoryStorage::new());
    assert_eq!(Theme::Dark, store.theme());
    assert!(store.get().is_dark);
}

#[test]
fn store_should_load_persisted_theme() {
    let store = ThemeStore::load(MemoryStorage::with_value("light"));
    assert!(!store.get().is_dark);
}

#[test]
fn invalid_persisted_theme_should_fall_back_to_default() {
    let store = ThemeStore::load(MemoryStorage::with_value("sepia"));
    assert_eq!(Theme::Dark, store.theme());
    assert!(store.is_persistent());
}

#[test]
fn toggle_twice_should_restore_theme() {
    for initial in ["dark", "light"] {
        let store = ThemeStore::load(MemoryStorage::with_value(initial));
        let original = store.get();

        store.toggle();
        assert_ne!(original, store.get());

        store.toggle();
        assert_eq!(original, store.get(), "toggle should be an involution");
    }
}

#[test]
fn toggle_should_persist_before_returning() {
    let storage = Rc::new(MemoryStorage::new());
    let store = ThemeStore::load(storage.clone());
    assert_eq!(None, storage.value());

    store.toggle();
    assert_eq!(Some("light".to_string()), storage.value());

    store.toggle();
    assert_eq!(Some("dark".to_string()), storage.value());

    let reloaded = ThemeStore::load(storage.clone());
    assert_eq!(store.get(), reloaded.get());
}

#[test]
fn subscribers_should_be_notified_until_dropped() {
    let store = ThemeStore::in_memory(Theme::Dark);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let subscription = {
        let seen = seen.clone();
        store.subscribe(move |theme| seen.borrow_mut().push(theme))
    };
    assert_eq!(1, store.subscriber_count());

    store.toggle();
    store.toggle();
    assert_eq!(vec![Theme::Light, Theme::Dark], *seen.borrow());

    subscription.unsubscribe();
    assert_eq!(0, store.subscriber_count());

    store.toggle();
    assert_eq!(2, seen.borrow().len(), "listener should be removed");
}

#[test]
fn subscription_outliving_store_should_drop_cleanly() {
    let store = ThemeStore::in_memory(Theme::Dark);
    let subscription = store.subscribe(|_| {});
    drop(store);
    drop(subscription);
}

#[test]
fn listener_may_unsubscribe_during_notification() {
    let store = ThemeStore::in_memory(Theme::Dark);
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(Cell::new(0));

    let subscription = {
        let slot = slot.clone();
        let calls = calls.clone();
        store.subscribe(move |_| {
            calls.set(calls.get() + 1);
            slot.borrow_mut().take();
        })
    };
    slot.replace(Some(subscription));

    store.toggle();
    store.toggle();
    assert_eq!(1, calls.get());
}

// *******************
// *** persistence ***
// *******************

struct FailingStorage {
    saves: Rc<Cell<usize>>,
}

impl ThemeStorage for FailingStorage {
    fn load(&self) -> Result<Option<Theme>> {
        Err(Error::storage("storage unavailable"))
    }

    fn save(&self, _theme: Theme) -> Result {
        self.saves.set(self.saves.get() + 1);
        Err(Error::storage("storage unavailable"))
    }
}

#[test]
fn failing_storage_should_not_break_toggle() {
    let saves = Rc::new(Cell::new(0));
    let store = ThemeStore::load(FailingStorage {
        saves: saves.clone(),
    });
    assert_eq!(Theme::Dark, store.theme());

    store.toggle();
    assert_eq!(Theme::Light, store.theme());
    assert!(!store.is_persistent());

    store.toggle();
    assert_eq!(Theme::Dark, store.theme());
    assert_eq!(1, saves.get(), "storage should be detached after a failure");
}

#[test]
fn theme_should_parse_persisted_values() {
    assert_eq!(Ok(Theme::Dark), "dark".parse());
    assert_eq!(Ok(Theme::Light), "light".parse());
    assert_eq!(
        Err(Error::InvalidTheme("Dark!".to_string())),
        "Dark!".parse::<Theme>()
    );

    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(Ok(theme), theme.to_string().parse());
    }
}

#[test]
fn theme_state_conversion_should_work() {
    assert_eq!(ThemeState { is_dark: true }, Theme::Dark.into());
    assert_eq!(Theme::Light, Theme::from(ThemeState { is_dark: false }));
}

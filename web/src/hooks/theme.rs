//! Theme hooks.
use portfolio_core::theme::{Theme, ThemeState, ThemeStore};
use yew::prelude::*;

/// Gets the injected theme store.
#[hook]
pub fn use_theme_store() -> ThemeStore {
    use_context::<ThemeStore>().expect("`ThemeStore` context not found")
}

/// Current theme.
/// Re-renders the component whenever the theme is toggled.
#[hook]
pub fn use_theme() -> ThemeState {
    let store = use_theme_store();
    let state = use_state(|| store.get());

    {
        let state = state.clone();

        use_effect_with(store, move |store| {
            state.set(store.get());
            let subscription = store.subscribe(move |theme| state.set(theme.into()));

            // destructor
            move || subscription.unsubscribe()
        });
    }

    *state
}

/// Reflects the theme as a class on the document root element.
#[hook]
pub fn use_document_theme(theme: ThemeState) {
    use_effect_with(theme, |theme| {
        let theme = Theme::from(*theme);
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            tracing::warn!("document root not found");
            return;
        };

        let classes = root.class_list();
        let res = classes
            .remove_1(theme.toggled().as_str())
            .and_then(|_| classes.add_1(theme.as_str()));

        if let Err(err) = res {
            tracing::warn!(?err, "could not set theme class");
        }
    });
}

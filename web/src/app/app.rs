//! Main application.
use crate::components::Splash;
use crate::hooks::{use_document_theme, use_splash, use_theme};
use crate::routes::{switch, Route};
use crate::storage::load_theme_store;
use portfolio_core::theme::ThemeStore;
use portfolio_core::SiteConfig;
use yew::prelude::*;
use yew_router::prelude::*;

// *********************
// *** App Component ***
// *********************

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// App initialization
///
/// ```mermaid
/// flowchart TD
///      start(Mount app) --> load_theme(Load persisted theme)
///      load_theme --> splash(Show splash)
///      splash -- Delay elapsed --> router(Render routed page in layout)
///      splash -- Unmounted --> cancel(Cancel splash timer)
/// ```
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let theme_store = use_memo(props.config.theme_key.clone(), |key| load_theme_store(key));
    let show_splash = use_splash(props.config.splash_delay());

    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
        <ContextProvider<ThemeStore> context={(*theme_store).clone()}>
            <DocumentTheme />
            if show_splash {
                <Splash />
            } else {
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            }
        </ContextProvider<ThemeStore>>
        </ContextProvider<SiteConfig>>
    }
}

/// Keeps the document's theme class in sync with the store.
#[function_component(DocumentTheme)]
fn document_theme() -> Html {
    let theme = use_theme();
    use_document_theme(theme);

    html! {}
}

use crate::components::Layout;
use crate::pages::{About, Contact, Experience, Home, NotFound, Projects, Skills};
use portfolio_core::navigation::{Page, View};
use yew::prelude::*;
use yew_router::prelude::*;

// Routes
#[derive(Clone, Copy, Routable, PartialEq, Debug)]
pub enum Route {
    /// Hero page.
    #[at("/")]
    Home,

    #[at("/about")]
    About,

    #[at("/skills")]
    Skills,

    #[at("/experience")]
    Experience,

    #[at("/projects")]
    Projects,

    #[at("/contact")]
    Contact,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Page of the route.
    /// `None` for [`Route::NotFound`].
    pub fn page(&self) -> Option<Page> {
        match self {
            Self::Home => Some(Page::Home),
            Self::About => Some(Page::About),
            Self::Skills => Some(Page::Skills),
            Self::Experience => Some(Page::Experience),
            Self::Projects => Some(Page::Projects),
            Self::Contact => Some(Page::Contact),
            Self::NotFound => None,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::About => Self::About,
            Page::Skills => Self::Skills,
            Page::Experience => Self::Experience,
            Page::Projects => Self::Projects,
            Page::Contact => Self::Contact,
        }
    }
}

impl From<Route> for View {
    fn from(route: Route) -> Self {
        match route.page() {
            Some(page) => View::Page(page),
            None => View::NotFound,
        }
    }
}

pub fn switch(route: Route) -> Html {
    let body = match View::from(route) {
        View::Page(Page::Home) => html! { <Home /> },
        View::Page(Page::About) => html! { <About /> },
        View::Page(Page::Skills) => html! { <Skills /> },
        View::Page(Page::Experience) => html! { <Experience /> },
        View::Page(Page::Projects) => html! { <Projects /> },
        View::Page(Page::Contact) => html! { <Contact /> },
        View::NotFound => html! { <NotFound /> },
    };

    html! {
        <Layout>{ body }</Layout>
    }
}

#[cfg(test)]
#[path = "./routes_test.rs"]
mod routes_test;

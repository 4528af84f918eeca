//! Projects page.
use portfolio_core::content::{Project, PROJECTS};
use portfolio_ui::components::{Card, CardUi};
use yew::prelude::*;

#[derive(PartialEq)]
struct ProjectCard(&'static Project);

impl CardUi for ProjectCard {
    fn title(&self) -> &str {
        self.0.title
    }

    fn body(&self) -> Html {
        html! {
            <>
                <p class={classes!("description")}>{ self.0.description }</p>
                <p class={classes!("tech")}>{ self.0.tech.join(", ") }</p>
            </>
        }
    }

    fn footer(&self) -> Option<Html> {
        Some(html! {
            <>
                <a href={self.0.source}>{ "GitHub" }</a>
                <a href={self.0.live}>{ "Live Demo" }</a>
            </>
        })
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <div class={classes!("page", "projects")}>
            <h2>{ "Projects" }</h2>
            <div class={classes!("card-list")}>
                { PROJECTS.iter().map(|project| html! {
                    <Card<ProjectCard> key={project.title} item={ProjectCard(project)} />
                }).collect::<Html>() }
            </div>
        </div>
    }
}

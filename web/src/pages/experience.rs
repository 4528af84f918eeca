//! Experience page.
use portfolio_core::content::{Experience as ExperienceEntry, EXPERIENCE};
use portfolio_ui::components::{Card, CardUi};
use yew::prelude::*;

#[derive(PartialEq)]
struct ExperienceCard(&'static ExperienceEntry);

impl CardUi for ExperienceCard {
    fn title(&self) -> &str {
        self.0.company
    }

    fn subtitle(&self) -> Option<String> {
        Some(format!("{} | {}", self.0.role, self.0.duration))
    }

    fn body(&self) -> Html {
        html! {
            <ul>
                { self.0.work.iter().map(|item| html! { <li>{ *item }</li> }).collect::<Html>() }
            </ul>
        }
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <div class={classes!("page", "experience")}>
            <h2>{ "Professional Experience" }</h2>
            <div class={classes!("card-list")}>
                { EXPERIENCE.iter().map(|entry| html! {
                    <Card<ExperienceCard> key={entry.company} item={ExperienceCard(entry)} />
                }).collect::<Html>() }
            </div>
        </div>
    }
}

//! Skills page.
use portfolio_core::content::{SkillCategory, SKILLS};
use portfolio_ui::components::{Card, CardUi};
use yew::prelude::*;

#[derive(PartialEq)]
struct SkillCard(&'static SkillCategory);

impl CardUi for SkillCard {
    fn title(&self) -> &str {
        self.0.name
    }

    fn body(&self) -> Html {
        html! { <p>{ self.0.skills.join(", ") }</p> }
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <div class={classes!("page", "skills")}>
            <h2>{ "My Skills" }</h2>
            <div class={classes!("card-list")}>
                { SKILLS.iter().map(|category| html! {
                    <Card<SkillCard> key={category.name} item={SkillCard(category)} />
                }).collect::<Html>() }
            </div>
        </div>
    }
}

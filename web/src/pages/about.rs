//! About page.
use portfolio_core::content::{PROFILE, TESTIMONIALS};
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class={classes!("page", "about")}>
            <h2>{ "About Me" }</h2>
            <p>{ PROFILE.about }</p>

            <section class={classes!("testimonials")}>
                <h3>{ "Testimonials" }</h3>
                { TESTIMONIALS.iter().map(|testimonial| html! {
                    <blockquote class={classes!("testimonial")}>
                        { format!("\"{}\" – {}", testimonial.quote, testimonial.author) }
                    </blockquote>
                }).collect::<Html>() }
            </section>
        </div>
    }
}

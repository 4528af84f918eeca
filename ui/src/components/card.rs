//! A UI card.
use yew::prelude::*;

/// Card interface.
pub trait CardUi {
    /// Card title.
    /// Displayed in an `h3` tag.
    fn title(&self) -> &str;

    /// Line displayed under the title.
    fn subtitle(&self) -> Option<String> {
        None
    }

    /// Card body.
    fn body(&self) -> Html;

    /// Card footer.
    fn footer(&self) -> Option<Html> {
        None
    }
}

/// Properties for a Card.
#[derive(Properties, PartialEq)]
pub struct CardProps<T: PartialEq + CardUi> {
    /// Item to display.
    pub item: T,

    #[prop_or_default]
    pub class: Classes,
}

/// Card component.
#[function_component(Card)]
pub fn card<T>(props: &CardProps<T>) -> Html
where
    T: 'static + PartialEq + CardUi,
{
    html! {
        <div class={classes!("card", props.class.clone())}>
            <h3 class={classes!("title")}>{ props.item.title() }</h3>
            if let Some(subtitle) = props.item.subtitle() {
                <p class={classes!("subtitle")}>{ subtitle }</p>
            }
            <div class={classes!("body")}>{ props.item.body() }</div>
            if let Some(footer) = props.item.footer() {
                <div class={classes!("footer")}>{ footer }</div>
            }
        </div>
    }
}

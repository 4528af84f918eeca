//! Link displayed as an icon.
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct IconLinkProps {
    pub href: AttrValue,
    pub icon: IconId,

    /// Accessible name of the link.
    pub title: AttrValue,

    /// Text displayed next to the icon.
    #[prop_or_default]
    pub label: Option<AttrValue>,

    /// Open in a new tab.
    #[prop_or(false)]
    pub external: bool,

    /// Mark the link as a download.
    #[prop_or(false)]
    pub download: bool,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconLink)]
pub fn icon_link(props: &IconLinkProps) -> Html {
    let (target, rel) = if props.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    let download = props.download.then_some(AttrValue::Static(""));

    html! {
        <a class={classes!("icon-link", props.class.clone())}
            href={props.href.clone()}
            title={props.title.clone()}
            {target}
            {rel}
            {download}>

            <Icon icon_id={props.icon} width={"20"} height={"20"} />
            if let Some(label) = &props.label {
                <span>{ label }</span>
            }
        </a>
    }
}

//! Display a message.
use crate::types::MessageType;
use yew::prelude::*;

// ***************
// *** Message ***
// ***************

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    #[prop_or_default]
    pub class: Classes,

    pub message: AttrValue,
    pub kind: MessageType,

    /// Html id of the element.
    /// Used to reference the message from form fields.
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let class = classes!("portfolio-ui-message", props.kind.class(), props.class.clone());
    let role = match props.kind {
        MessageType::Error => "alert",
        MessageType::Info | MessageType::Success => "status",
    };

    html! {
        <div {class} id={props.id.clone()} {role}>
            { &props.message }
        </div>
    }
}

//! Controlled `<input>` with an inline error.
use super::error_id;
use crate::components::Message;
use crate::types::MessageType;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    /// Name of the field, also used as the element id.
    pub name: AttrValue,

    #[prop_or_default]
    pub value: AttrValue,

    #[prop_or(AttrValue::Static("text"))]
    pub r#type: AttrValue,

    #[prop_or_default]
    pub placeholder: Option<AttrValue>,

    /// Error displayed under the field.
    #[prop_or_default]
    pub error: Option<AttrValue>,

    /// Called with the new value on every input.
    #[prop_or_default]
    pub oninput: Callback<String>,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<web_sys::HtmlInputElement>();
            oninput.emit(input.value());
        })
    };

    let error_id = error_id(&props.name);
    let invalid = props.error.is_some();
    let described_by = invalid.then(|| error_id.clone());
    let class = classes!(
        "portfolio-ui-text-field",
        invalid.then_some("invalid"),
        props.class.clone()
    );

    html! {
        <div {class}>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.r#type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                aria-invalid={invalid.to_string()}
                aria-describedby={described_by}
                {oninput} />

            if let Some(error) = &props.error {
                <Message id={AttrValue::from(error_id)} message={error.clone()} kind={MessageType::Error} />
            }
        </div>
    }
}

//! Contact page.
use crate::commands::contact::submit_contact;
use crate::constants::SUBMITTED_MESSAGE;
use crate::hooks::{use_contact_form, ContactFormAction, ContactFormReducer};
use portfolio_core::contact::Field;
use portfolio_core::content::PROFILE;
use portfolio_core::SiteConfig;
use portfolio_ui::components::form::{TextArea, TextField};
use portfolio_ui::components::{IconLink, Message};
use portfolio_ui::types::MessageType;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::IconId;

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_context::<SiteConfig>().expect("`SiteConfig` context not found");
    let form = use_contact_form();

    {
        let endpoint = config.form_endpoint.clone();

        // Delivery is not awaited, the form shows as sent regardless.
        use_effect_with(form.submitted().cloned(), move |submitted| {
            if let Some(draft) = submitted.clone() {
                spawn_local(async move {
                    match submit_contact(&endpoint, &draft).await {
                        Ok(()) => tracing::info!("contact message delivered"),
                        Err(err) => tracing::warn!(?err, "could not deliver contact message"),
                    }
                });
            }
        });
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactFormAction::Submit);
        })
    };

    html! {
        <div class={classes!("page", "contact")}>
            <h2>{ "Contact Me" }</h2>
            <div class={classes!("contact-details")}>
                <IconLink
                    href={format!("mailto:{}", PROFILE.email)}
                    icon={IconId::FeatherMail}
                    title={"Email"}
                    label={AttrValue::from(PROFILE.email)} />

                <IconLink
                    href={format!("tel:{}", PROFILE.phone)}
                    icon={IconId::FeatherPhone}
                    title={"Phone"}
                    label={AttrValue::from(PROFILE.phone)} />
            </div>

            if form.is_submitted() {
                <Message message={SUBMITTED_MESSAGE} kind={MessageType::Success} />
            } else {
                <form class={classes!("contact-form")} {onsubmit} novalidate={true}>
                    <TextField
                        name={Field::Name.as_str()}
                        value={field_value(&form, Field::Name)}
                        placeholder={"Your Name"}
                        error={field_error(&form, Field::Name)}
                        oninput={set_field(&form, Field::Name)} />

                    <TextField
                        name={Field::Email.as_str()}
                        r#type={"email"}
                        value={field_value(&form, Field::Email)}
                        placeholder={"Your Email"}
                        error={field_error(&form, Field::Email)}
                        oninput={set_field(&form, Field::Email)} />

                    <TextArea
                        name={Field::Message.as_str()}
                        value={field_value(&form, Field::Message)}
                        placeholder={"Your Message"}
                        error={field_error(&form, Field::Message)}
                        oninput={set_field(&form, Field::Message)} />

                    <button type={"submit"}>{ "Send Message" }</button>
                </form>
            }
        </div>
    }
}

fn field_value(form: &ContactFormReducer, field: Field) -> AttrValue {
    form.draft()
        .map(|draft| AttrValue::from(draft.get(field).to_string()))
        .unwrap_or_default()
}

fn field_error(form: &ContactFormReducer, field: Field) -> Option<AttrValue> {
    form.error(field).map(AttrValue::from)
}

fn set_field(form: &ContactFormReducer, field: Field) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        form.dispatch(ContactFormAction::SetField(field, value));
    })
}

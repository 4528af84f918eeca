//! Page layout.
//! Header with navigation, theme and profile links around the page body.
use super::{NavBar, ThemeToggle};
use crate::hooks::{use_navigate_to, use_theme};
use portfolio_core::content::PROFILE;
use portfolio_core::navigation::Page;
use portfolio_ui::components::IconLink;
use yew::prelude::*;
use yew_icons::IconId;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let theme = use_theme();
    let navigate_to = use_navigate_to();

    let go_home = Callback::from(move |_: MouseEvent| {
        navigate_to.emit(Page::Home);
    });

    let theme_class = if theme.is_dark { "theme-dark" } else { "theme-light" };
    let style = format!("background-image: url({});", PROFILE.background);

    html! {
        <div id={"layout"} class={classes!("layout", theme_class)} {style}>
            <header class={classes!("layout-header")}>
                <div class={classes!("site-title")} onclick={go_home}>{ PROFILE.name }</div>
                <NavBar />
                <div class={classes!("site-actions")}>
                    <ThemeToggle />
                    <IconLink
                        href={PROFILE.linkedin}
                        icon={IconId::FeatherLinkedin}
                        title={"LinkedIn"}
                        external={true} />

                    <IconLink
                        class={classes!("resume")}
                        href={PROFILE.resume}
                        icon={IconId::FeatherDownload}
                        title={"Download resume"}
                        label={AttrValue::from("Resume")}
                        download={true} />
                </div>
            </header>
            <main class={classes!("layout-body")}>
                { for props.children.iter() }
            </main>
        </div>
    }
}

use super::*;
use fake::faker::lorem::raw::Word;
use fake::locales::EN;
use fake::Fake;

#[test]
fn page_paths_should_round_trip() {
    for page in Page::ALL {
        assert_eq!(Some(page), Page::from_path(page.path()));
        assert_eq!(Ok(page), page.name().parse());
    }
}

#[test]
fn from_path_should_normalize() {
    assert_eq!(Some(Page::Home), Page::from_path(""));
    assert_eq!(Some(Page::Home), Page::from_path("/?ref=linkedin"));
    assert_eq!(Some(Page::About), Page::from_path("/about/"));
    assert_eq!(Some(Page::Contact), Page::from_path("/contact#form"));
    assert_eq!(Some(Page::Skills), Page::from_path("/skills?tab=cloud#top"));
    assert_eq!(None, Page::from_path("/about/me"));
    assert_eq!(None, Page::from_path("/404"));
}

#[test]
fn page_names_should_be_case_insensitive() {
    assert_eq!(Ok(Page::Experience), "Experience".parse());
    assert_eq!(Ok(Page::Projects), " PROJECTS ".parse());
    assert!(matches!("blog".parse::<Page>(), Err(Error::UnknownPage(name)) if name == "blog"));
}

// **********************
// *** path navigator ***
// **********************

#[test]
fn path_navigator_should_start_home() {
    let nav = PathNavigator::new();
    assert_eq!(Some(Page::Home), nav.current_page());
    assert_eq!("/", nav.current_path());
}

#[test]
fn path_navigator_navigate_should_be_idempotent() {
    for page in Page::ALL {
        let mut once = PathNavigator::new();
        once.navigate(page);

        let mut twice = PathNavigator::new();
        twice.navigate(page);
        twice.navigate(page);

        assert_eq!(once.current_page(), twice.current_page());
        assert_eq!(Some(page), twice.current_page());
        assert_eq!(once.history_len(), twice.history_len());
    }
}

#[test]
fn path_navigator_should_resolve_deep_links() {
    let nav = PathNavigator::with_path("/experience/");
    assert_eq!(View::Page(Page::Experience), nav.current_view());

    let nav = PathNavigator::with_path("/does-not-exist");
    assert_eq!(View::NotFound, nav.current_view());
    assert_eq!(None, nav.current_page());
}

#[test]
fn path_navigator_unknown_target_should_be_not_found() {
    let mut nav = PathNavigator::new();
    nav.navigate(Page::Skills);

    let target: String = Word(EN).fake();
    let target = format!("unknown-{target}");
    nav.navigate_named(&target);
    assert_eq!(View::NotFound, nav.current_view());
    assert_eq!(format!("/{target}"), nav.current_path());

    nav.navigate_named("/blog/post");
    assert_eq!(View::NotFound, nav.current_view());

    nav.navigate_named("contact");
    assert_eq!(Some(Page::Contact), nav.current_page());
}

#[test]
fn path_navigator_blank_or_query_target_should_be_not_found() {
    for target in ["", "  ", "?x", "?x=1", "#top", "about/", "contact?ref=mail"] {
        let mut nav = PathNavigator::new();
        nav.navigate(Page::Skills);
        nav.navigate_named(target);
        assert_eq!(View::NotFound, nav.current_view(), "`{target}` should not be found");
        assert_eq!(NOT_FOUND_PATH, nav.current_path());
    }

    let mut nav = PathNavigator::new();
    nav.navigate(Page::Skills);
    nav.navigate_named(" /about ");
    assert_eq!(Some(Page::About), nav.current_page(), "explicit paths should resolve");
}

#[test]
fn path_navigator_history_should_work() {
    let mut nav = PathNavigator::new();
    assert!(!nav.back(), "no entry before the first");

    nav.navigate(Page::About);
    nav.navigate(Page::Projects);
    assert!(!nav.forward(), "no entry after the last");

    assert!(nav.back());
    assert_eq!(Some(Page::About), nav.current_page());

    assert!(nav.back());
    assert_eq!(Some(Page::Home), nav.current_page());

    assert!(nav.forward());
    assert_eq!(Some(Page::About), nav.current_page());

    // pushing discards forward entries
    nav.navigate(Page::Contact);
    assert!(!nav.forward());
    assert_eq!(3, nav.history_len());

    assert!(nav.back());
    assert_eq!(Some(Page::About), nav.current_page());
}

// ***********************
// *** state navigator ***
// ***********************

#[test]
fn state_navigator_navigate_should_be_idempotent() {
    for page in Page::ALL {
        let mut once = StateNavigator::new();
        once.navigate(page);

        let mut twice = StateNavigator::new();
        twice.navigate(page);
        twice.navigate(page);

        assert_eq!(once, twice);
        assert_eq!(page, twice.page());
    }
}

#[test]
fn state_navigator_unknown_target_should_keep_page() {
    let mut nav = StateNavigator::new();
    nav.navigate_named("experience");
    assert_eq!(Page::Experience, nav.page());

    nav.navigate_named("blog");
    nav.navigate_named("");
    nav.navigate_named("/about");
    assert_eq!(Page::Experience, nav.page());
    assert_eq!(Some(Page::Experience), nav.current_page());
}

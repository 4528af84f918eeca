//! Page navigation.
//!
//! Two navigators share the [`Navigation`] contract:
//! + [`PathNavigator`] derives the page from an address path and keeps a history.
//! Unknown paths resolve to [`View::NotFound`].
//! + [`StateNavigator`] holds the page in memory only.
//! Unknown page names leave the current page unchanged.
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ************
// *** Page ***
// ************

/// Content pages of the site.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Skills,
        Page::Experience,
        Page::Projects,
        Page::Contact,
    ];

    /// Symbolic name of the page.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Address path of the page.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Skills => "/skills",
            Self::Experience => "/experience",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
        }
    }

    /// Human readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Resolves an address path.
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPage(name.to_string()))
    }
}

/// Address path of the not found view.
pub const NOT_FOUND_PATH: &str = "/404";

/// Strips query, fragment and trailing slashes.
/// An empty path is the root.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

// ************
// *** View ***
// ************

/// What the layout body renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Page(Page),
    NotFound,
}

impl View {
    pub fn page(&self) -> Option<Page> {
        match self {
            Self::Page(page) => Some(*page),
            Self::NotFound => None,
        }
    }
}

impl From<Page> for View {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

// ******************
// *** Navigation ***
// ******************

/// Navigation contract shared by both navigators.
pub trait Navigation {
    /// View currently selected.
    fn current_view(&self) -> View;

    /// Navigates to `target`.
    /// Navigating to the current page is a no-op.
    fn navigate(&mut self, target: Page);

    /// Navigates to a page by symbolic name or path.
    /// Unknown targets never fail, see the implementors for how they resolve.
    fn navigate_named(&mut self, target: &str);

    fn current_page(&self) -> Option<Page> {
        self.current_view().page()
    }
}

// **********************
// *** Path navigator ***
// **********************

/// Address based navigation with back and forward history.
#[derive(Clone, Debug)]
pub struct PathNavigator {
    history: Vec<String>,
    cursor: usize,
}

impl PathNavigator {
    pub fn new() -> Self {
        Self::with_path(Page::Home.path())
    }

    /// Starts at `path`, e.g. from a deep link.
    pub fn with_path(path: &str) -> Self {
        Self {
            history: vec![normalize_path(path).to_string()],
            cursor: 0,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.history[self.cursor]
    }

    /// Pushes `path` onto the history, discarding forward entries.
    /// Pushing the current path does nothing.
    pub fn push_path(&mut self, path: &str) {
        let path = normalize_path(path);
        if path == self.current_path() {
            return;
        }

        tracing::debug!(path, "push path");
        self.history.truncate(self.cursor + 1);
        self.history.push(path.to_string());
        self.cursor += 1;
    }

    /// Moves back one entry.
    /// Returns `false` if already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        true
    }

    /// Moves forward one entry.
    /// Returns `false` if already at the last entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }

        self.cursor += 1;
        true
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for PathNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation for PathNavigator {
    fn current_view(&self) -> View {
        match Page::from_path(self.current_path()) {
            Some(page) => View::Page(page),
            None => View::NotFound,
        }
    }

    fn navigate(&mut self, target: Page) {
        self.push_path(target.path());
    }

    /// Names resolve to their page's path, paths are pushed as is.
    /// Any other name renders [`View::NotFound`], even if it would
    /// normalize to a page's path.
    fn navigate_named(&mut self, target: &str) {
        let target = target.trim();
        match target.parse::<Page>() {
            Ok(page) => self.navigate(page),
            Err(_) if target.starts_with('/') => self.push_path(target),
            Err(_) => {
                let path = format!("/{target}");
                if Page::from_path(&path).is_some() {
                    self.push_path(NOT_FOUND_PATH);
                } else {
                    self.push_path(&path);
                }
            }
        }
    }
}

// ***********************
// *** State navigator ***
// ***********************

/// In memory navigation without an address representation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StateNavigator {
    page: Page,
}

impl StateNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }
}

impl Navigation for StateNavigator {
    fn current_view(&self) -> View {
        View::Page(self.page)
    }

    fn navigate(&mut self, target: Page) {
        self.page = target;
    }

    /// Unknown names are ignored.
    fn navigate_named(&mut self, target: &str) {
        match target.parse::<Page>() {
            Ok(page) => self.navigate(page),
            Err(err) => tracing::debug!(%err, "ignoring navigation"),
        }
    }
}

#[cfg(test)]
#[path = "./navigation_test.rs"]
mod navigation_test;

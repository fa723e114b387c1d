//! The page set and its paths.

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Caption,
    Summarize,
}

impl Route {
    /// Navigation order, as shown in the header bar.
    pub const ALL: [Route; 4] = [Route::Home, Route::Caption, Route::Summarize, Route::About];

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().trim_end_matches('/') {
            "" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/caption" => Some(Route::Caption),
            "/summarize" => Some(Route::Summarize),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Caption => "/caption",
            Route::Summarize => "/summarize",
        }
    }

    /// Label in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Caption => "Image Captioning",
            Route::Summarize => "Text Summarization",
        }
    }

    /// Function key that navigates here (F1..F4).
    pub fn hotkey(self) -> u8 {
        match self {
            Route::Home => 1,
            Route::Caption => 2,
            Route::Summarize => 3,
            Route::About => 4,
        }
    }

    pub fn from_hotkey(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.hotkey() == n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_and_unknown_paths() {
        assert_eq!(Route::from_path("/caption/"), Some(Route::Caption));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn hotkeys_are_unique() {
        for n in 1..=4 {
            assert!(Route::from_hotkey(n).is_some());
        }
        assert_eq!(Route::from_hotkey(5), None);
    }
}

use serde::Serialize;
use crate::content::{self, LandingContent};
use crate::theme::Theme;
use crate::Route;

/// One of the two drafts of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    German,
    English,
}

impl Edition {
    pub const ALL: [Edition; 2] = [Edition::German, Edition::English];

    pub fn content(self) -> &'static LandingContent {
        match self {
            Edition::German => &content::de::CONTENT,
            Edition::English => &content::en::CONTENT,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Edition::German => Theme::Dashed,
            Edition::English => Theme::Rounded,
        }
    }

    pub fn lang(self) -> &'static str {
        self.content().lang
    }

    /// Edition served under `route`, `None` for the not-found page.
    pub fn from_route(route: &Route) -> Option<Edition> {
        match route {
            Route::German => Some(Edition::German),
            Route::English => Some(Edition::English),
            Route::NotFound => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Edition::German => "/",
            Edition::English => "/en",
        }
    }

    pub fn other(self) -> Edition {
        match self {
            Edition::German => Edition::English,
            Edition::English => Edition::German,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn paths_match_routes() {
        for edition in Edition::ALL {
            let route = Route::recognize(edition.path()).unwrap();
            assert_eq!(Edition::from_route(&route), Some(edition));
            assert_eq!(route.to_path(), edition.path());
        }
    }

    #[test]
    fn editions_pair_language_and_theme() {
        assert_eq!(Edition::German.lang(), "de");
        assert_eq!(Edition::German.theme(), Theme::Dashed);
        assert_eq!(Edition::English.lang(), "en");
        assert_eq!(Edition::English.theme(), Theme::Rounded);
        assert_eq!(Edition::German.other(), Edition::English);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = Route::recognize("/fr").unwrap();
        assert_eq!(route, Route::NotFound);
        assert_eq!(Edition::from_route(&route), None);
    }
}

// src/app/shell.rs
use tracing::debug;

pub const APP_TITLE: &str = "CinemaScope";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Watchlist,
}

impl NavTarget {
    pub const ALL: [Self; 2] = [Self::Home, Self::Watchlist];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Watchlist => "Watchlist",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Watchlist => "☰",
        }
    }
}

/// Bottom-bar press handler. The buttons are placeholders: there is no second
/// screen to go to, so this only leaves a trace.
pub fn on_nav_pressed(target: NavTarget) {
    debug!("nav placeholder pressed: {}", target.label());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::data::list_movies;
    use crate::app::list::{render_list, CardStates};

    #[test]
    fn bar_has_home_then_watchlist() {
        let labels: Vec<_> = NavTarget::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Home", "Watchlist"]);
    }

    #[test]
    fn pressing_nav_changes_nothing() {
        let movies = list_movies();
        let mut states = CardStates::default();
        states.toggle(&movies[0].id);
        let before = render_list(movies, &states);

        for t in NavTarget::ALL {
            on_nav_pressed(t);
        }

        assert_eq!(render_list(movies, &states), before);
        assert_eq!(states.expanded_count(), 1);
    }
}

// src/app/card.rs
use super::data::Movie;

/// Expand/collapse flag owned by one card. Starts collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    pub expanded: bool,
}

impl CardState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Direction of the arrow next to the title. Down while expanded, up while collapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chevron {
    Up,
    Down,
}

impl Chevron {
    pub const fn for_expanded(expanded: bool) -> Self {
        if expanded {
            Self::Down
        } else {
            Self::Up
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "⏶",
            Self::Down => "⏷",
        }
    }
}

/// Heart drawn over the poster. Visual only; pressing it does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeAffordance;

impl LikeAffordance {
    pub const fn glyph(self) -> &'static str {
        "♡"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardHeader<'a> {
    pub poster: Option<&'a str>,
    pub like: LikeAffordance,
    pub title: &'a str,
    pub chevron: Chevron,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDetails<'a> {
    pub director: &'a str,
    pub year: &'a str,
    pub genre: &'a str,
    pub plot: &'a str,
}

impl CardDetails<'_> {
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Director: {}", self.director),
            format!("Year: {}", self.year),
            format!("Genre: {}", self.genre),
            format!("Synopsis: {}", self.plot),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView<'a> {
    pub id: &'a str,
    pub header: CardHeader<'a>,
    /// `None` while collapsed: the region is left out, not hidden.
    pub details: Option<CardDetails<'a>>,
}

pub fn details(movie: &Movie) -> CardDetails<'_> {
    CardDetails {
        director: &movie.director,
        year: &movie.year,
        genre: &movie.genre,
        plot: &movie.plot,
    }
}

/// Describe one card for the given movie and expand flag. No side effects.
pub fn render(movie: &Movie, expanded: bool) -> CardView<'_> {
    CardView {
        id: &movie.id,
        header: CardHeader {
            poster: movie.poster(),
            like: LikeAffordance,
            title: &movie.title,
            chevron: Chevron::for_expanded(expanded),
        },
        details: expanded.then(|| details(movie)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, director: &str) -> Movie {
        Movie {
            id: id.into(),
            title: format!("Film {id}"),
            director: director.into(),
            year: "1999".into(),
            genre: "Drama".into(),
            plot: format!("Plot of {id}"),
            images: vec![format!("https://img.example/{id}.jpg")],
        }
    }

    #[test]
    fn starts_collapsed() {
        assert!(!CardState::default().expanded);
    }

    #[test]
    fn toggle_parity() {
        for n in 0..7 {
            let mut st = CardState::default();
            for _ in 0..n {
                st.toggle();
            }
            assert_eq!(st.expanded, n % 2 == 1, "after {n} toggles");
        }

        let mut st = CardState { expanded: true };
        st.toggle();
        st.toggle();
        assert!(st.expanded);
    }

    #[test]
    fn collapsed_card_has_no_details() {
        let m = sample("a", "Someone");
        let view = render(&m, false);
        assert!(view.details.is_none());
        assert_eq!(view.header.chevron, Chevron::Up);
        assert_eq!(view.header.title, "Film a");
        assert_eq!(view.header.like, LikeAffordance);
    }

    #[test]
    fn expanded_card_shows_its_own_details() {
        let a = sample("a", "Director A");
        let b = sample("b", "Director B");
        let va = render(&a, true);
        let vb = render(&b, true);

        let da = va.details.expect("details");
        assert_eq!(
            da.lines(),
            [
                "Director: Director A".to_string(),
                "Year: 1999".to_string(),
                "Genre: Drama".to_string(),
                "Synopsis: Plot of a".to_string(),
            ]
        );
        assert_eq!(vb.details.expect("details").director, "Director B");
        assert_eq!(va.header.chevron, Chevron::Down);
        assert_eq!(va.id, "a");
    }

    #[test]
    fn no_images_means_no_poster() {
        let mut m = sample("x", "Nobody");
        m.images.clear();
        let view = render(&m, true);
        assert_eq!(view.header.poster, None);
        assert!(view.details.is_some());
    }
}

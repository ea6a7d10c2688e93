use once_cell::sync::Lazy;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub director: String,
    pub year: String,
    pub genre: String,
    pub plot: String,
    pub images: Vec<String>,
}

impl Movie {
    /// First image reference, used as the card poster.
    pub fn poster(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

fn movie(
    id: &str,
    title: &str,
    director: &str,
    year: &str,
    genre: &str,
    plot: &str,
    images: &[&str],
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        director: director.to_string(),
        year: year.to_string(),
        genre: genre.to_string(),
        plot: plot.to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}

static MOVIES: Lazy<Vec<Movie>> = Lazy::new(|| {
    vec![
        movie(
            "tt0499549",
            "Avatar",
            "James Cameron",
            "2009",
            "Action, Adventure, Fantasy",
            "A paraplegic Marine dispatched to the moon Pandora on a unique mission becomes torn \
             between following his orders and protecting the world he feels is his home.",
            &[
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMjEyOTYyMzUxNl5BMl5BanBnXkFtZTcwNTg0MTUzNA@@._V1_SX1500_CR0,0,1500,999_AL_.jpg",
                "https://images-na.ssl-images-amazon.com/images/M/MV5BNzM2MDk3MTcyMV5BMl5BanBnXkFtZTcwNjg0MTUzNA@@._V1_SX1777_CR0,0,1777,999_AL_.jpg",
            ],
        ),
        movie(
            "tt0416449",
            "300",
            "Zack Snyder",
            "2006",
            "Action, Drama, Fantasy",
            "King Leonidas of Sparta and a force of 300 men fight the Persians at Thermopylae \
             in 480 B.C.",
            &[
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMTMwNTg5MzMwMV5BMl5BanBnXkFtZTcwMzA2NTIyMw@@._V1_SX1777_CR0,0,1777,937_AL_.jpg",
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMTQwNTgyNTMzNF5BMl5BanBnXkFtZTcwNDA2NTIyMw@@._V1_SX1777_CR0,0,1777,935_AL_.jpg",
            ],
        ),
        movie(
            "tt0848228",
            "The Avengers",
            "Joss Whedon",
            "2012",
            "Action, Sci-Fi, Thriller",
            "Earth's mightiest heroes must come together and learn to fight as a team if they \
             are to stop the mischievous Loki and his alien army from enslaving humanity.",
            &[
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMTA0NjY0NzE4OTReQTJeQWpwZ15BbWU3MDczODg2Nzc@._V1_SX1777_CR0,0,1777,999_AL_.jpg",
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMjE1MzEzMjcyM15BMl5BanBnXkFtZTcwNDM4ODY3Nw@@._V1_SX1777_CR0,0,1777,999_AL_.jpg",
            ],
        ),
        movie(
            "tt0993846",
            "The Wolf of Wall Street",
            "Martin Scorsese",
            "2013",
            "Biography, Comedy, Crime",
            "Based on the true story of Jordan Belfort, from his rise to a wealthy stock-broker \
             living the high life to his fall involving crime, corruption and the federal \
             government.",
            &[
                "https://images-na.ssl-images-amazon.com/images/M/MV5BNDIwMDIxNzk3Ml5BMl5BanBnXkFtZTgwMTg0MzQ4MDE@._V1_SX1500_CR0,0,1500,999_AL_.jpg",
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMTc0NzAxODAyMl5BMl5BanBnXkFtZTgwMDg0MzQ4MDE@._V1_SX1500_CR0,0,1500,999_AL_.jpg",
            ],
        ),
        movie(
            "tt0816692",
            "Interstellar",
            "Christopher Nolan",
            "2014",
            "Adventure, Drama, Sci-Fi",
            "A team of explorers travel through a wormhole in space in an attempt to ensure \
             humanity's survival.",
            &[
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMjA3NTEwOTMxMV5BMl5BanBnXkFtZTgwMjMyODgxMzE@._V1_SX1500_CR0,0,1500,999_AL_.jpg",
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMzE3MTM0MTc3Ml5BMl5BanBnXkFtZTgwMDIyODgxMzE@._V1_SX1500_CR0,0,1500,999_AL_.jpg",
            ],
        ),
        movie(
            "tt0944947",
            "Game of Thrones",
            "N/A",
            "2011–2019",
            "Adventure, Drama, Fantasy",
            "While a civil war brews between several noble families in Westeros, the children of \
             the former rulers of the land attempt to rise up to power. Meanwhile a forgotten \
             race, bent on destruction, plans to return after thousands of years in the North.",
            &[
                "https://images-na.ssl-images-amazon.com/images/M/MV5BNDc1MGUyNzItNWRkOC00MjM1LWJjNjMtZTZlYWIxMGRmYzVlXkEyXkFqcGdeQXVyMzU3MDEyNjk@._V1_SX1777_CR0,0,1777,999_AL_.jpg",
            ],
        ),
        movie(
            "tt2306299",
            "Vikings",
            "N/A",
            "2013–2020",
            "Action, Drama, History",
            "The world of the Vikings is brought to life through the journey of Ragnar Lothbrok, \
             the first Viking to emerge from Norse legend and onto the pages of history.",
            &[
                "https://images-na.ssl-images-amazon.com/images/M/MV5BMjM5MTM1ODUxNV5BMl5BanBnXkFtZTgwNTAzOTI2ODE@._V1_.jpg",
            ],
        ),
        movie(
            "tt3749900",
            "Gotham",
            "N/A",
            "2014–2019",
            "Action, Crime, Drama",
            "The story behind Detective James Gordon's rise to prominence in Gotham City in the \
             years before Batman's arrival.",
            &[],
        ),
    ]
});

/// The fixed movie list shown on the main screen. Same slice, same order, every call.
pub fn list_movies() -> &'static [Movie] {
    MOVIES.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_is_stable_between_calls() {
        let a = list_movies();
        let b = list_movies();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a, b));
        let titles: Vec<_> = a.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles[0], "Avatar");
        assert_eq!(titles[4], "Interstellar");
    }

    #[test]
    fn ids_unique_and_titles_present() {
        let mut seen = HashSet::new();
        for m in list_movies() {
            assert!(seen.insert(m.id.as_str()), "duplicate id {}", m.id);
            assert!(!m.title.trim().is_empty());
        }
    }

    #[test]
    fn poster_is_first_image_or_none() {
        let movies = list_movies();
        assert_eq!(movies[0].poster(), Some(movies[0].images[0].as_str()));
        let bare = movies.iter().find(|m| m.images.is_empty()).expect("entry without images");
        assert_eq!(bare.poster(), None);
    }
}

use yew::prelude::*;

use crate::models::Movie;

#[derive(Properties, PartialEq, Clone)]
pub struct MovieCardProps {
    pub movie: Movie,
    pub on_select: Callback<Movie>,
    #[prop_or_default]
    pub is_favorite: bool,
}

/// One clickable row of a movie list.
#[function_component(MovieCard)]
pub fn movie_card(props: &MovieCardProps) -> Html {
    let onclick = {
        let movie = props.movie.clone();
        props.on_select.reform(move |_: MouseEvent| movie.clone())
    };
    let movie = &props.movie;
    let rating = movie.rating_label();

    html! {
        <li class="list-group-item movie-card" {onclick}>
            <div class="movie-image">
                if let Some(link) = movie.link().map(str::to_string) {
                    <img src={link} alt={movie.name().to_string()} class="movieImage" />
                }
            </div>
            <div class="movie-info">
                <h3>
                    {movie.title()}
                    if props.is_favorite {
                        <span class="favorite-badge" title="Favorite">{" ★"}</span>
                    }
                </h3>
                if !rating.is_empty() {
                    <p class="movie-rating">{format!("{}/10", rating)}</p>
                }
                if let Some(genres) = movie.genres().map(str::to_string) {
                    <p class="movie-genres">{genres}</p>
                }
            </div>
        </li>
    }
}

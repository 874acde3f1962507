use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Movie identifier as sent by the API. Depending on the endpoint it is
/// either a number or a string.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{}", n),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

/// Movie record owned by the API. Only `id` is modelled; every other key,
/// nulls included, stays in `fields` untouched so the record goes back to
/// `/favorite` exactly as it came in.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Movie {
    pub id: MovieId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Movie {
    /// String field, or `None` when absent, null or not a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> &str {
        self.text("name").unwrap_or_default()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.text("mediaType")
    }

    /// Poster image URL
    pub fn link(&self) -> Option<&str> {
        self.text("link")
    }

    pub fn genres(&self) -> Option<&str> {
        self.text("genres")
    }

    pub fn summary(&self) -> Option<&str> {
        self.text("summary")
    }

    pub fn certificate(&self) -> Option<&str> {
        self.text("certificate")
    }

    pub fn year_label(&self) -> String {
        value_label(self.fields.get("year"))
    }

    pub fn rating_label(&self) -> String {
        value_label(self.fields.get("rating"))
    }

    pub fn running_time_label(&self) -> String {
        value_label(self.fields.get("running_time"))
    }

    /// "Name (Year)" heading used by list rows and the detail page.
    pub fn title(&self) -> String {
        let year = self.year_label();
        if year.is_empty() {
            self.name().to_string()
        } else {
            format!("{} ({})", self.name(), year)
        }
    }
}

/// Renders a loosely-typed JSON field: strings without quotes, null as empty.
fn value_label(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Body of `/search`, `/advSearch` and `/pages`. Older deployments answer
/// with a bare array, newer ones wrap it in `{movies, count}`. The catalog
/// total comes from `/movieCount`, so the wrapper's count is not read.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(untagged)]
pub enum MovieListing {
    Page { movies: Vec<Movie> },
    List(Vec<Movie>),
}

impl MovieListing {
    pub fn into_movies(self) -> Vec<Movie> {
        match self {
            MovieListing::Page { movies } => movies,
            MovieListing::List(movies) => movies,
        }
    }
}

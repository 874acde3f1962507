use serde::{Deserialize, Serialize};

/// Body of `/search`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SearchRequest {
    #[serde(rename = "searchContents")]
    pub search_contents: String,
}

/// Body of `/advSearch`. Unset filters go out as `null`; the server treats
/// them as "no constraint". `mediaType` is only sent when set.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearch {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub min_year: Option<i32>,
    pub min_rate: Option<f32>,
    pub max_year: Option<i32>,
    pub max_rate: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl AdvancedSearch {
    /// Builds filters from raw form inputs. Blank or unparsable fields
    /// become `None`.
    pub fn from_form(
        name: &str,
        genre: &str,
        min_year: &str,
        min_rate: &str,
        max_year: &str,
        max_rate: &str,
        media_type: &str,
    ) -> Self {
        Self {
            name: non_blank(name),
            genre: non_blank(genre),
            min_year: parse_field(min_year),
            min_rate: parse_field(min_rate),
            max_year: parse_field(max_year),
            max_rate: parse_field(max_rate),
            media_type: non_blank(media_type),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_field<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_body_uses_wire_name() {
        let body = serde_json::to_value(SearchRequest {
            search_contents: "Matrix".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"searchContents": "Matrix"}));
    }

    #[test]
    fn advanced_search_sends_every_filter() {
        let filters = AdvancedSearch::from_form(" Alien ", "", "1979", "7.5", "", "x", "");
        let body = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Alien",
                "genre": null,
                "minYear": 1979,
                "minRate": 7.5,
                "maxYear": null,
                "maxRate": null
            })
        );
        assert!(!filters.is_empty());
        assert!(AdvancedSearch::from_form("", " ", "", "", "", "", "").is_empty());
    }

    #[test]
    fn media_type_only_when_set() {
        let filters = AdvancedSearch {
            media_type: Some("Movie".to_string()),
            ..AdvancedSearch::default()
        };
        let body = serde_json::to_value(&filters).unwrap();
        assert_eq!(body["mediaType"], json!("Movie"));
    }

    #[test]
    fn media_type_comes_from_the_form() {
        let filters = AdvancedSearch::from_form("", "", "", "", "", "", "TV Show");
        assert_eq!(filters.media_type.as_deref(), Some("TV Show"));
        assert!(!filters.is_empty());
        let body = serde_json::to_value(&filters).unwrap();
        assert_eq!(body["mediaType"], json!("TV Show"));
    }
}

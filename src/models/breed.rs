//! Breed catalog entries

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A breed or `breed-sub` compound with an optional representative image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    /// Display name, unique within one catalog snapshot
    pub name: String,
    /// Representative image URL, absent when the lookup failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Breed {
    pub fn new(name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Catalog ordering: case-insensitive first. Names equal ignoring case
    /// put the lowercase spelling first.
    pub fn compare_names(a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_omitted_when_absent() {
        let json = serde_json::to_string(&Breed::new("pug", None)).unwrap();
        assert_eq!(json, r#"{"name":"pug"}"#);
    }

    #[test]
    fn test_compare_names_ignores_case_first() {
        let mut names = vec!["beagle", "Akita", "affenpinscher", "akita"];
        names.sort_by(|a, b| Breed::compare_names(a, b));
        assert_eq!(names, vec!["affenpinscher", "akita", "Akita", "beagle"]);
    }

    #[test]
    fn test_sub_breed_sorts_after_parent() {
        assert_eq!(Breed::compare_names("hound", "hound-afghan"), Ordering::Less);
        assert_eq!(Breed::compare_names("hound-afghan", "husky"), Ordering::Less);
    }
}

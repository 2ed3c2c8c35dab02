//! Conversions between free-text place names and URL slugs.

/// Lowercase, hyphen-delimited slug for `text`.
///
/// `&` becomes the word `and`; anything outside `[a-z0-9]`, whitespace and
/// `-` is dropped. Whitespace runs and repeated hyphens collapse into a
/// single `-`, and the result never starts or ends with one.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase().replace('&', "and");

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
    }
    slug
}

/// `"Jersey City", "NJ"` -> `"jersey-city-nj"`. The state code is not
/// length-checked.
pub fn city_slug(city: &str, state_abbr: &str) -> String {
    format!("{}-{}", slugify(city), state_abbr.to_lowercase())
}

/// Joins two slugs that are already canonical.
pub fn service_city_slug(service_slug: &str, city_slug: &str) -> String {
    format!("{service_slug}-{city_slug}")
}

/// Display title for a slug: `"journal-square"` -> `"Journal Square"`.
///
/// This is lossy and not the inverse of [`slugify`]; punctuation and casing
/// removed while slugifying cannot be recovered (`"obrien-and-sons"` reads
/// back as `"Obrien And Sons"`).
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when `slug` is non-empty and already in the form [`slugify`] emits.
pub fn is_canonical(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(slug: &str) {
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected character in {slug:?}"
        );
        assert!(!slug.starts_with('-'), "leading hyphen in {slug:?}");
        assert!(!slug.ends_with('-'), "trailing hyphen in {slug:?}");
        assert!(!slug.contains("--"), "doubled hyphen in {slug:?}");
    }

    #[test]
    fn slugify_handles_punctuation_and_ampersand() {
        assert_eq!(slugify("O'Brien & Sons"), "obrien-and-sons");
        assert_eq!(slugify("  Jersey   City "), "jersey-city");
        assert_eq!(slugify("St. Louis"), "st-louis");
        assert_eq!(slugify("Wilkes--Barre"), "wilkes-barre");
    }

    #[test]
    fn slugify_is_total() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("- - -"), "");
    }

    #[test]
    fn slugify_output_is_always_well_formed() {
        let inputs = [
            "O'Brien & Sons",
            "-leading and trailing-",
            " - mixed\t\nwhitespace - ",
            "Café Déjà Vu",
            "100% Locks & Keys!!",
            "a&b",
            "--",
            "Ünïcödé",
            "Route 9W / Exit 2",
        ];
        for input in inputs {
            assert_well_formed(&slugify(input));
        }
    }

    #[test]
    fn slugify_is_idempotent() {
        for input in ["Jersey City", "O'Brien & Sons", "Route 9W / Exit 2"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn city_slug_appends_lowercased_state() {
        assert_eq!(city_slug("Jersey City", "NJ"), "jersey-city-nj");
        assert_eq!(city_slug("jersey-city", "nj"), "jersey-city-nj");
        assert_eq!(city_slug("Hoboken", "NEWJ"), "hoboken-newj");
    }

    #[test]
    fn service_city_slug_joins_without_normalizing() {
        assert_eq!(
            service_city_slug("garage-door-repair", "jersey-city-nj"),
            "garage-door-repair-jersey-city-nj"
        );
    }

    #[test]
    fn title_case_capitalizes_each_segment() {
        assert_eq!(title_case("journal-square"), "Journal Square");
        assert_eq!(title_case("obrien-and-sons"), "Obrien And Sons");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("-odd--input-"), "Odd Input");
    }

    #[test]
    fn canonical_check() {
        assert!(is_canonical("jersey-city-nj"));
        assert!(!is_canonical("Jersey-City"));
        assert!(!is_canonical("jersey--city"));
        assert!(!is_canonical(""));
    }
}

use crate::constants::PATH_SEPARATOR;
use crate::error::Error;
use crate::routes::{RouteDescriptor, RouteRegistry};
use tracing::trace;

/// Converts a call name into a canonical slash path
///
/// The conversion is purely mechanical:
/// - the first character is lower-cased
/// - every later uppercase character opens a new segment: `"showSeasonSummary"` -> `"/show/season/summary"`
/// - consecutive capitals each open their own segment: `"userXYZ"` -> `"/user/x/y/z"`
/// - all other characters are copied unchanged
///
/// A leading separator is prefixed and `suffix` is appended as-is.
#[must_use]
pub fn method_path(method: &str, suffix: &str) -> String {
    let mut result = String::with_capacity(method.len() + suffix.len() + 4);
    result.push(PATH_SEPARATOR);

    let mut chars = method.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_lowercase());
    }
    for ch in chars {
        if ch.is_uppercase() {
            result.push(PATH_SEPARATOR);
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }

    result.push_str(suffix);
    result
}

/// Looks up the route for a call name in `registry`.
///
/// The suffixed form is tried first, then the bare form (write routes carry
/// no suffix).
///
/// # Errors
/// Returns [`Error::UnknownMethod`] when neither form is registered.
pub fn resolve<'r>(registry: &'r RouteRegistry, method: &str) -> Result<&'r RouteDescriptor, Error> {
    let suffix = registry.version().path_suffix();
    let suffixed = method_path(method, suffix);
    if let Some(route) = registry.get(&suffixed) {
        trace!(target: "trakt_dispatch::resolver", "{method} -> {suffixed}");
        return Ok(route);
    }

    if suffix.is_empty() {
        return Err(Error::unknown_method(method, &suffixed));
    }

    let bare = method_path(method, "");
    registry.get(&bare).map_or_else(
        || Err(Error::unknown_method(method, &suffixed)),
        |route| {
            trace!(target: "trakt_dispatch::resolver", "{method} -> {bare} (bare)");
            Ok(route)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ApiVersion;

    #[test]
    fn test_method_path() {
        assert_eq!(method_path("showSeasonSummary", ".json/"), "/show/season/summary.json/");
        assert_eq!(method_path("showSeasonSummary", ""), "/show/season/summary");
        assert_eq!(method_path("searchMovies", ".json/"), "/search/movies.json/");
        assert_eq!(method_path("ShowSeasons", ""), "/show/seasons");
        assert_eq!(method_path("userXYZ", ""), "/user/x/y/z");
        assert_eq!(method_path("movieWatchingnow", ""), "/movie/watchingnow");
        assert_eq!(method_path("calendar2Shows", ""), "/calendar2/shows");
        assert_eq!(method_path("a", ""), "/a");
        assert_eq!(method_path("", ".json/"), "/.json/");
    }

    #[test]
    fn test_resolve_suffixed_route() {
        let registry = ApiVersion::V1.registry().unwrap();
        let route = resolve(registry, "showSummary").unwrap();
        assert_eq!(route.path(), "/show/summary.json/");
    }

    #[test]
    fn test_resolve_falls_back_to_bare_route() {
        let registry = ApiVersion::V1.registry().unwrap();
        let route = resolve(registry, "movieSeen").unwrap();
        assert_eq!(route.path(), "/movie/seen");
    }

    #[test]
    fn test_resolve_unknown_method_reports_suffixed_path() {
        let registry = ApiVersion::V1.registry().unwrap();
        match resolve(registry, "showSeasonSummary") {
            Err(Error::UnknownMethod { method, path }) => {
                assert_eq!(method, "showSeasonSummary");
                assert_eq!(path, "/show/season/summary.json/");
            }
            other => panic!("expected UnknownMethod, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_v2_has_no_suffix() {
        let registry = ApiVersion::V2.registry().unwrap();
        assert_eq!(resolve(registry, "moviesTrending").unwrap().path(), "/movies/trending");
        assert!(resolve(registry, "showSummary").is_err());
    }
}

//! Header-authenticated API surface. Paths carry no suffix.

use super::{bulk, field, flag, RouteEntry};

pub(super) const ROUTES: &[RouteEntry] = &[
    // auth
    ("/auth/login", &[field("login"), field("password")]),
    ("/auth/logout", &[bulk().optional()]),
    // calendars
    ("/calendars/all/movies", &[flag("start_date"), flag("days")]),
    ("/calendars/all/shows", &[flag("start_date"), flag("days")]),
    ("/calendars/all/shows/new", &[flag("start_date"), flag("days")]),
    ("/calendars/all/shows/premieres", &[flag("start_date"), flag("days")]),
    ("/calendars/my/movies", &[flag("start_date"), flag("days")]),
    ("/calendars/my/shows", &[flag("start_date"), flag("days")]),
    ("/calendars/my/shows/new", &[flag("start_date"), flag("days")]),
    ("/calendars/my/shows/premieres", &[flag("start_date"), flag("days")]),
    // checkin
    ("/checkin", &[bulk()]),
    // comments
    ("/comments", &[bulk()]),
    // genres
    ("/genres/movies", &[]),
    ("/genres/shows", &[]),
    // movies
    ("/movies/anticipated", &[]),
    ("/movies/boxoffice", &[]),
    ("/movies/collected", &[flag("period")]),
    ("/movies/played", &[flag("period")]),
    ("/movies/popular", &[]),
    ("/movies/trending", &[]),
    ("/movies/updates", &[flag("start_date")]),
    ("/movies/watched", &[flag("period")]),
    // recommendations
    ("/recommendations/movies", &[]),
    ("/recommendations/shows", &[]),
    // scrobble
    ("/scrobble/pause", &[bulk()]),
    ("/scrobble/start", &[bulk()]),
    ("/scrobble/stop", &[bulk()]),
    // shows
    ("/shows/anticipated", &[]),
    ("/shows/collected", &[flag("period")]),
    ("/shows/played", &[flag("period")]),
    ("/shows/popular", &[]),
    ("/shows/trending", &[]),
    ("/shows/updates", &[flag("start_date")]),
    ("/shows/watched", &[flag("period")]),
    // sync
    ("/sync/collection", &[bulk()]),
    ("/sync/collection/movies", &[]),
    ("/sync/collection/remove", &[bulk()]),
    ("/sync/collection/shows", &[]),
    ("/sync/history", &[bulk()]),
    ("/sync/history/episodes", &[flag("id")]),
    ("/sync/history/movies", &[flag("id")]),
    ("/sync/history/remove", &[bulk()]),
    ("/sync/history/shows", &[flag("id")]),
    ("/sync/ratings", &[bulk()]),
    ("/sync/ratings/episodes", &[flag("rating")]),
    ("/sync/ratings/movies", &[flag("rating")]),
    ("/sync/ratings/remove", &[bulk()]),
    ("/sync/ratings/seasons", &[flag("rating")]),
    ("/sync/ratings/shows", &[flag("rating")]),
    ("/sync/watched/movies", &[]),
    ("/sync/watched/shows", &[]),
    ("/sync/watchlist", &[bulk()]),
    ("/sync/watchlist/episodes", &[]),
    ("/sync/watchlist/movies", &[]),
    ("/sync/watchlist/remove", &[bulk()]),
    ("/sync/watchlist/seasons", &[]),
    ("/sync/watchlist/shows", &[]),
    // users
    ("/users/hidden/calendar", &[flag("type")]),
    ("/users/hidden/recommendations", &[flag("type")]),
    ("/users/requests", &[]),
    ("/users/settings", &[]),
];

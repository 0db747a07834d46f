//! Legacy key-in-path API surface.
//!
//! Read routes carry the `.json/` suffix; write routes are registered bare.

use super::{bulk, escaped, field, flag, segment, slug, RouteEntry};

pub(super) const ROUTES: &[RouteEntry] = &[
    // account
    ("/account/create", &[field("username"), field("password"), field("email")]),
    ("/account/settings", &[bulk().optional()]),
    ("/account/test", &[bulk().optional()]),
    // activity
    (
        "/activity/community.json/",
        &[flag("types"), flag("actions"), flag("start_ts"), flag("end_ts")],
    ),
    (
        "/activity/episodes.json/",
        &[
            slug("titleOrId"),
            segment("season"),
            segment("episode"),
            flag("actions"),
            flag("start_ts"),
            flag("end_ts"),
        ],
    ),
    (
        "/activity/friends.json/",
        &[flag("types"), flag("actions"), flag("start_ts"), flag("end_ts")],
    ),
    (
        "/activity/movies.json/",
        &[slug("titleOrId"), flag("actions"), flag("start_ts"), flag("end_ts")],
    ),
    (
        "/activity/seasons.json/",
        &[
            slug("titleOrId"),
            segment("season"),
            flag("actions"),
            flag("start_ts"),
            flag("end_ts"),
        ],
    ),
    (
        "/activity/shows.json/",
        &[slug("titleOrId"), flag("actions"), flag("start_ts"), flag("end_ts")],
    ),
    (
        "/activity/user.json/",
        &[
            segment("username"),
            flag("types"),
            flag("actions"),
            flag("start_ts"),
            flag("end_ts"),
        ],
    ),
    (
        "/activity/user/episodes.json/",
        &[
            segment("username"),
            slug("titleOrId"),
            segment("season"),
            segment("episode"),
            flag("actions"),
            flag("start_ts"),
            flag("end_ts"),
        ],
    ),
    (
        "/activity/user/movies.json/",
        &[
            segment("username"),
            slug("titleOrId"),
            flag("actions"),
            flag("start_ts"),
            flag("end_ts"),
        ],
    ),
    (
        "/activity/user/seasons.json/",
        &[
            segment("username"),
            slug("titleOrId"),
            segment("season"),
            flag("actions"),
            flag("start_ts"),
            flag("end_ts"),
        ],
    ),
    (
        "/activity/user/shows.json/",
        &[
            segment("username"),
            slug("titleOrId"),
            flag("actions"),
            flag("start_ts"),
            flag("end_ts"),
        ],
    ),
    // calendar
    ("/calendar/premieres.json/", &[flag("date"), flag("days")]),
    ("/calendar/shows.json/", &[flag("date"), flag("days")]),
    // friends
    ("/friends/add", &[field("friend")]),
    ("/friends/all", &[bulk().optional()]),
    ("/friends/approve", &[field("friend")]),
    ("/friends/delete", &[field("friend")]),
    ("/friends/deny", &[field("friend")]),
    ("/friends/requests", &[bulk().optional()]),
    // genres
    ("/genres/movies.json/", &[]),
    ("/genres/shows.json/", &[]),
    // lists
    (
        "/lists/add",
        &[
            field("name"),
            field("privacy"),
            field("description"),
            field("show_numbers"),
            field("allow_shouts"),
        ],
    ),
    ("/lists/delete", &[field("slug")]),
    ("/lists/items/add", &[field("slug"), field("items")]),
    ("/lists/items/delete", &[field("slug"), field("items")]),
    (
        "/lists/update",
        &[
            field("slug"),
            field("name"),
            field("privacy"),
            field("description"),
            field("show_numbers"),
            field("allow_shouts"),
        ],
    ),
    // movie
    ("/movie/cancelcheckin", &[bulk().optional()]),
    ("/movie/cancelwatching", &[bulk().optional()]),
    ("/movie/checkin", &[bulk()]),
    ("/movie/comments.json/", &[slug("titleOrId"), flag("type")]),
    ("/movie/library", &[bulk()]),
    ("/movie/related.json/", &[slug("titleOrId"), flag("hidewatched")]),
    ("/movie/scrobble", &[bulk()]),
    ("/movie/seen", &[bulk()]),
    ("/movie/stats.json/", &[slug("titleOrId")]),
    ("/movie/summaries.json/", &[segment("titleOrIds"), flag("extended")]),
    ("/movie/summary.json/", &[slug("titleOrId")]),
    ("/movie/unlibrary", &[bulk()]),
    ("/movie/unseen", &[bulk()]),
    ("/movie/unwatchlist", &[bulk()]),
    ("/movie/watching", &[bulk()]),
    ("/movie/watchingnow.json/", &[slug("titleOrId")]),
    ("/movie/watchlist", &[bulk()]),
    // movies
    ("/movies/trending.json/", &[]),
    ("/movies/updated.json/", &[segment("timestamp")]),
    // rate
    ("/rate/episode", &[bulk()]),
    ("/rate/episodes", &[bulk()]),
    ("/rate/movie", &[bulk()]),
    ("/rate/movies", &[bulk()]),
    ("/rate/show", &[bulk()]),
    ("/rate/shows", &[bulk()]),
    // recommendations
    ("/recommendations/movies", &[bulk().optional()]),
    ("/recommendations/movies/dismiss", &[bulk()]),
    ("/recommendations/shows", &[bulk().optional()]),
    ("/recommendations/shows/dismiss", &[bulk()]),
    // search
    ("/search/episodes.json/", &[escaped("query")]),
    ("/search/movies.json/", &[escaped("query")]),
    ("/search/people.json/", &[escaped("query")]),
    ("/search/shows.json/", &[escaped("query")]),
    ("/search/users.json/", &[escaped("query")]),
    // shout
    ("/shout/episode", &[bulk()]),
    ("/shout/movie", &[bulk()]),
    ("/shout/show", &[bulk()]),
    // show
    ("/show/cancelcheckin", &[bulk().optional()]),
    ("/show/cancelwatching", &[bulk().optional()]),
    ("/show/checkin", &[bulk()]),
    ("/show/comments.json/", &[slug("titleOrId"), flag("type")]),
    (
        "/show/episode/comments.json/",
        &[slug("titleOrId"), segment("season"), segment("episode"), flag("type")],
    ),
    ("/show/episode/library", &[bulk()]),
    ("/show/episode/seen", &[bulk()]),
    (
        "/show/episode/stats.json/",
        &[slug("titleOrId"), segment("season"), segment("episode")],
    ),
    (
        "/show/episode/summary.json/",
        &[slug("titleOrId"), segment("season"), segment("episode")],
    ),
    ("/show/episode/unlibrary", &[bulk()]),
    ("/show/episode/unseen", &[bulk()]),
    ("/show/episode/unwatchlist", &[bulk()]),
    (
        "/show/episode/watchingnow.json/",
        &[slug("titleOrId"), segment("season"), segment("episode")],
    ),
    ("/show/episode/watchlist", &[bulk()]),
    ("/show/library", &[bulk()]),
    ("/show/related.json/", &[slug("titleOrId"), flag("hidewatched")]),
    ("/show/scrobble", &[bulk()]),
    ("/show/season.json/", &[slug("titleOrId"), slug("season")]),
    ("/show/season/library", &[bulk()]),
    ("/show/season/seen", &[bulk()]),
    ("/show/seasons.json/", &[slug("titleOrId")]),
    ("/show/seen", &[bulk()]),
    ("/show/stats.json/", &[slug("titleOrId")]),
    ("/show/summaries.json/", &[segment("titleOrIds"), flag("extended")]),
    ("/show/summary.json/", &[slug("titleOrId"), flag("extended")]),
    ("/show/unlibrary", &[bulk()]),
    ("/show/unwatchlist", &[bulk()]),
    ("/show/watching", &[bulk()]),
    ("/show/watchingnow.json/", &[slug("titleOrId")]),
    ("/show/watchlist", &[bulk()]),
    // shows
    ("/shows/trending.json/", &[]),
    ("/shows/updated.json/", &[segment("timestamp")]),
    // user
    (
        "/user/calendar/shows.json/",
        &[segment("username"), flag("date"), flag("days")],
    ),
    ("/user/lastactivity.json/", &[segment("username")]),
    ("/user/library/movies/all.json/", &[segment("username"), flag("extended")]),
    (
        "/user/library/movies/collection.json/",
        &[segment("username"), flag("extended")],
    ),
    (
        "/user/library/movies/watched.json/",
        &[segment("username"), flag("extended")],
    ),
    ("/user/library/shows/all.json/", &[segment("username"), flag("extended")]),
    (
        "/user/library/shows/collection.json/",
        &[segment("username"), flag("extended")],
    ),
    (
        "/user/library/shows/watched.json/",
        &[segment("username"), flag("extended")],
    ),
    ("/user/list.json/", &[segment("username"), segment("slug")]),
    ("/user/lists.json/", &[segment("username")]),
    ("/user/network/followers.json/", &[segment("username")]),
    ("/user/network/following.json/", &[segment("username")]),
    ("/user/network/friends.json/", &[segment("username")]),
    ("/user/profile.json/", &[segment("username")]),
    (
        "/user/progress/collected.json/",
        &[segment("username"), flag("title"), flag("sort"), flag("extended")],
    ),
    (
        "/user/progress/watched.json/",
        &[segment("username"), flag("title"), flag("sort"), flag("extended")],
    ),
    (
        "/user/ratings/episodes.json/",
        &[segment("username"), flag("rating"), flag("extended")],
    ),
    (
        "/user/ratings/movies.json/",
        &[segment("username"), flag("rating"), flag("extended")],
    ),
    (
        "/user/ratings/shows.json/",
        &[segment("username"), flag("rating"), flag("extended")],
    ),
    ("/user/watching.json/", &[segment("username")]),
    ("/user/watchlist/episodes.json/", &[segment("username")]),
    ("/user/watchlist/movies.json/", &[segment("username")]),
    ("/user/watchlist/shows.json/", &[segment("username")]),
];

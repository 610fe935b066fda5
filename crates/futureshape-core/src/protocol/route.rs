//! Route catalogue: the single table mapping `(category, topic)` to a route.

use super::envelope::Category;

/// Every message kind this client understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `data/user-profile-image`
    ProfileImage,
    /// `data/search`
    Search,
    /// `data/autocomplete`
    Autocomplete,
    /// `oauth/register`
    Register,
    /// `oauth/unregister` (reserved)
    Unregister,
}

// Canonical names first; later rows are legacy topic names accepted on read.
const TABLE: &[(Category, &str, Route)] = &[
    (Category::Data, "user-profile-image", Route::ProfileImage),
    (Category::Data, "search", Route::Search),
    (Category::Data, "autocomplete", Route::Autocomplete),
    (Category::Oauth, "register", Route::Register),
    (Category::Oauth, "unregister", Route::Unregister),
    (Category::Oauth, "user-register", Route::Register),
    (Category::Oauth, "user-unregister", Route::Unregister),
];

impl Route {
    pub const ALL: [Route; 5] = [
        Route::ProfileImage,
        Route::Search,
        Route::Autocomplete,
        Route::Register,
        Route::Unregister,
    ];

    /// Resolve a pair. `None` means unknown: the message is dropped.
    pub fn resolve(category: Category, topic: &str) -> Option<Route> {
        TABLE
            .iter()
            .find(|(c, t, _)| *c == category && *t == topic)
            .map(|(_, _, r)| *r)
    }

    pub fn category(self) -> Category {
        match self {
            Route::ProfileImage | Route::Search | Route::Autocomplete => Category::Data,
            Route::Register | Route::Unregister => Category::Oauth,
        }
    }

    /// Canonical topic name written on the wire.
    pub fn topic(self) -> &'static str {
        match self {
            Route::ProfileImage => "user-profile-image",
            Route::Search => "search",
            Route::Autocomplete => "autocomplete",
            Route::Register => "register",
            Route::Unregister => "unregister",
        }
    }
}

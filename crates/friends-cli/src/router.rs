//! Application routes and the navigation stack.

use std::fmt;

use friends_core::FriendId;

/// A location in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - the list view.
    Home,
    /// `/friend/{id}` - the detail view.
    Friend(FriendId),
    /// `/add-friend` - the creation view.
    AddFriend,
    /// `/edit-friend/{id}` - linked from the detail view, no screen yet.
    EditFriend(FriendId),
    /// Anything else.
    NotFound(String),
}

impl Route {
    /// Resolve a path. Never fails; unknown paths map to [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["add-friend"] => Route::AddFriend,
            ["friend", id] => match id.parse() {
                Ok(id) => Route::Friend(id),
                Err(_) => Route::NotFound(trimmed.to_string()),
            },
            ["edit-friend", id] => match id.parse() {
                Ok(id) => Route::EditFriend(id),
                Err(_) => Route::NotFound(trimmed.to_string()),
            },
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Friend(id) => format!("/friend/{}", id),
            Route::AddFriend => "/add-friend".to_string(),
            Route::EditFriend(id) => format!("/edit-friend/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// History of visited routes. The last entry is the current location.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
        }
    }

    pub fn current(&self) -> &Route {
        // history is never empty: back() keeps the first entry
        &self.history[self.history.len() - 1]
    }

    /// Navigate to `route`, keeping the current location in history.
    pub fn push(&mut self, route: Route) {
        self.history.push(route);
    }

    /// Navigate to `route`, dropping the current location from history.
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.history.last_mut() {
            *last = route;
        }
    }

    /// Go back one step. Returns false when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/add-friend"), Route::AddFriend);
        assert_eq!(Route::parse("/friend/12"), Route::Friend(FriendId::new(12)));
        assert_eq!(Route::parse("friend/12/"), Route::Friend(FriendId::new(12)));
        assert_eq!(
            Route::parse("/edit-friend/3"),
            Route::EditFriend(FriendId::new(3))
        );
    }

    #[test]
    fn unknown_or_malformed_paths_are_not_found() {
        assert_eq!(
            Route::parse("/friend/abc"),
            Route::NotFound("/friend/abc".to_string())
        );
        assert!(matches!(Route::parse("/settings"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/friend"), Route::NotFound(_)));
    }

    #[test]
    fn paths_survive_a_round_trip() {
        for route in [
            Route::Home,
            Route::AddFriend,
            Route::Friend(FriendId::new(8)),
            Route::EditFriend(FriendId::new(8)),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn replace_drops_current_entry() {
        let mut nav = Navigator::new(Route::Home);
        nav.push(Route::Friend(FriendId::new(1)));
        nav.replace(Route::Home);

        assert_eq!(nav.current(), &Route::Home);
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Home);
        assert!(!nav.back());
    }

    #[test]
    fn push_then_back() {
        let mut nav = Navigator::new(Route::Home);
        nav.push(Route::AddFriend);
        assert_eq!(nav.current(), &Route::AddFriend);
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Home);
    }
}

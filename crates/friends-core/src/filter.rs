//! Case-insensitive search over an already loaded list.

use crate::model::Friend;

/// Returns true if `friend` should be shown for the search text `query`.
///
/// An empty query matches everything. Otherwise the lowercased query must
/// occur in the lowercased name or description.
pub fn matches_search(friend: &Friend, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    friend.name.to_lowercase().contains(&query)
        || friend.description.to_lowercase().contains(&query)
}

/// Returns the friends matching `query`, preserving the input order.
pub fn filter_friends<'a>(friends: &'a [Friend], query: &str) -> Vec<&'a Friend> {
    friends.iter().filter(|f| matches_search(f, query)).collect()
}

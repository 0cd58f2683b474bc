//! Friend identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Server-assigned identifier of a friend record.
///
/// The client never mints identifiers; it only parses them from paths and
/// responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(u64);

impl FriendId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FriendId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self).map_err(|e| {
            InvalidInputError::FriendId {
                value: s.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl From<u64> for FriendId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!("42".parse::<FriendId>().unwrap(), FriendId::new(42));
        assert_eq!(" 7 ".parse::<FriendId>().unwrap().get(), 7);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!("abc".parse::<FriendId>().is_err());
        assert!("-1".parse::<FriendId>().is_err());
        assert!("".parse::<FriendId>().is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&FriendId::new(5)).unwrap(), "5");
    }
}

/*!
 * Synthetic Logins
 * User identities and addresses derived from a login index
 */

use super::prng::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Shortest generated username
pub const MIN_NAME_LEN: usize = 5;

/// Longest generated username
pub const MAX_NAME_LEN: usize = 13;

/// Codes are drawn from `0..CODE_SPACE`
pub const CODE_SPACE: u32 = 10_000;

/// Compound user identity: display name plus numeric code
///
/// Equality compares both fields. Ordering is by code, then name. The hash
/// covers the name only, which keeps equal users hashing identically while
/// sending every code variant of a name to the same partition.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct UserId {
    pub username: String,
    pub code: u32,
}

impl UserId {
    pub fn new(username: impl Into<String>, code: u32) -> Self {
        Self {
            username: username.into(),
            code,
        }
    }
}

impl PartialEq for UserId {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.username == other.username
    }
}

impl Ord for UserId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code
            .cmp(&other.code)
            .then_with(|| self.username.cmp(&other.username))
    }
}

impl PartialOrd for UserId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for UserId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{:04}", self.username, self.code)
    }
}

/// Address-like value registered for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IpAddress(pub u64);

impl fmt::Display for IpAddress {
    /// Dotted quad of the low 32 bits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = (self.0 as u32).to_be_bytes();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

/// Login number `index` of the synthetic workload
///
/// A pure function of `index`: the generator is seeded with
/// `[index, 0, 0, 0]` and draws, in order, the name length, one draw per
/// character, the code and the address.
pub fn fake_login(index: u64) -> (UserId, IpAddress) {
    let mut rng = Xoshiro256PlusPlus::from_seed(index);

    let span = (MAX_NAME_LEN - MIN_NAME_LEN + 1) as u64;
    let name_len = (rng.next_u64() % span) as usize + MIN_NAME_LEN;

    let username: String = (0..name_len)
        .map(|_| char::from(b'a' + (rng.next_u64() % 26) as u8))
        .collect();
    let code = (rng.next_u64() % u64::from(CODE_SPACE)) as u32;
    let address = IpAddress(rng.next_u64() & 0xFFFF_FFFF);

    (UserId { username, code }, address)
}

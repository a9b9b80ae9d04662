/*!
 * Synthetic Login Workload
 *
 * Reproducible (user, address) pairs for exercising a registry under load.
 */

mod login;
mod prng;

pub use login::{fake_login, IpAddress, UserId, CODE_SPACE, MAX_NAME_LEN, MIN_NAME_LEN};
pub use prng::Xoshiro256PlusPlus;

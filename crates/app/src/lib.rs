//! Backend-integrated storefront: the remote inventory adapter and the
//! two-phase reservation store built on the `satchel` core.

pub mod remote;
pub mod store;

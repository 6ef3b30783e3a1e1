//! Fetch lifecycles for the two views.
//!
//! Both fetchers are plain state machines: committing a key (a page number,
//! or a game id) enters Loading and hands the caller the request it must
//! perform; `apply` installs the outcome only while the key it was issued
//! for is still the committed one. A response that lost that race is
//! dropped, which is the only cancellation this crate does. The fetchers
//! never talk to the network themselves and are fully independent of each
//! other.


pub mod detail;
pub mod list;

pub use detail::DetailFetcher;
pub use list::ListFetcher;

/// The four-way status of one asynchronous fetch. Exactly one variant holds
/// at any time; entering Loading discards any previous payload.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

pub mod compare;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod normalize;

pub use compare::{compare, Comparison, LineDifference};
pub use fetch::{fetch, fetcher_for, FetchError, Fetcher, Mechanism, RequestOptions};
pub use normalize::{equivalent, normalize};

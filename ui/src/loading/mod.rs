//! Global page-loading state: which loaders are in flight and how far along they are.

mod aggregator;
mod observers;
mod tracker;

pub use aggregator::LoadingAggregator;
pub use aggregator::LoadingState;
pub use observers::Observers;
pub use observers::SubscriptionId;
pub use tracker::Loader;
pub use tracker::LoaderGuard;
pub use tracker::LoadingTracker;

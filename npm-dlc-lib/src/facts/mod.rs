//! Package discovery and download-count collection
//!
//! This module gathers everything npm-dlc knows about the packages of a user. Two
//! providers talk to the outside world:
//!
//! - **Registry**: scrapes the user's profile page on the npm website and turns each
//!   package card into a [`PackageInfo`].
//! - **Downloads**: asks the npm download-counts API for the point value of the last
//!   day, week and month of a single package, producing [`DownloadCounts`].
//!
//! The [`Collector`] ties the two together for one user: the profile page is fetched
//! once, then every package's counts are requested concurrently and matched back to
//! the package they belong to, yielding one [`PackageFacts`] per package in the order
//! the profile page lists them.
//!
//! A failing download window never fails its package. The window counts as zero and
//! the failure travels alongside the counts so the caller can report it.

mod collector;
#[cfg(debug_assertions)]
pub mod downloads;
#[cfg(not(debug_assertions))]
pub(crate) mod downloads;
mod http;
mod package_facts;
#[cfg(debug_assertions)]
pub mod registry;
#[cfg(not(debug_assertions))]
pub(crate) mod registry;

pub use collector::Collector;
pub use downloads::{DownloadCounts, DownloadWindow, WindowFailure};
pub use package_facts::PackageFacts;
pub use registry::PackageInfo;

//! A minimal client for the parts of the OpenSubsonic API that kestrel needs:
//! connectivity checks and paged album listings.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod album;
pub use album::*;

mod system;

mod request;

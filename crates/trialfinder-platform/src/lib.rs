//! Device services used by the embedding bridge: the one-shot location
//! fetch and the external URL handler.

pub mod location;
pub mod opener;

pub use location::{
    fetch_coordinate, service_from_config, FixedLocation, IpLocation, LocationService, NoLocation,
};
pub use opener::{SystemUrlOpener, UrlOpener, EXTERNAL_SCHEMES};

pub mod central;
pub mod orbit;
pub mod rng;
pub mod star_cloud;
pub mod starfield;

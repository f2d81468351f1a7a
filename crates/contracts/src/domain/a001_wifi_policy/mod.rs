pub mod aggregate;
pub mod catalog;
pub mod dto;
pub mod error;
pub mod policy_id;

pub use aggregate::{DeviceCount, Policy};
pub use catalog::SitePolicyCatalog;
pub use error::{PolicyAttribute, PolicyError};
pub use policy_id::{generate_policy_id, PolicyIdGenerator, PolicyIdParts, SegmentCodes};

pub mod connection_type;
pub mod cycle_type;
pub mod data_volume;
pub mod occupancy;
pub mod segment;
pub mod speed_tier;

pub use connection_type::ConnectionType;
pub use cycle_type::CycleType;
pub use data_volume::DataVolume;
pub use occupancy::{MemberType, ResidentType};
pub use segment::Segment;
pub use speed_tier::SpeedTier;

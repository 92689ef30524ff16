mod body;
mod body_type;
mod metadata;

pub use self::body::Body;
pub use self::body_type::BodyType;
pub use self::metadata::{RenderMetadata, RenderMetadataMap};

/// Flags for body state
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Activity and sleep state of a body
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
        pub struct BodyFlags: u32 {
            /// Body participates in the simulation
            const ACTIVE = 0x01;

            /// Body is awake (only meaningful for dynamic bodies)
            const AWAKE = 0x02;
        }
    }

    impl Default for BodyFlags {
        fn default() -> Self {
            Self::ACTIVE | Self::AWAKE
        }
    }
}

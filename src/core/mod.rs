pub mod catalog;
pub mod constants;
pub mod error;
pub mod keys;
pub mod mixer;
pub mod notice;
pub mod particle;
pub mod playback;
pub mod registry;
pub mod stop;
pub mod volume;

pub use catalog::*;
pub use error::MixerError;
pub use keys::*;
pub use mixer::*;
pub use notice::*;
pub use playback::*;
pub use registry::*;
pub use stop::*;

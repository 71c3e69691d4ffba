//! Typed command wrappers
//!
//! Each wrapper maps method calls onto command lines and parses the reply
//! shape it expects. They only need the two primitives of
//! [`CommandSink`](mcpi_link_channel::CommandSink), so they run over a real
//! [`BlockingChannel`](mcpi_link_channel::BlockingChannel) or over
//! an in-memory scripted sink in unit tests.
//!
//! # Command Groups
//!
//! - [`Minecraft`]: world blocks, entities, chat, checkpoints, settings
//! - [`CmdPositioner`]: position/direction/rotation, for the player or an entity
//! - [`CmdEntity`]: entity names and removal
//! - [`CmdCamera`]: camera mode and position
//! - [`CmdEvents`]: block hit, chat post and projectile hit polling
//!
//! # Errors
//!
//! [`ApiError::Channel`] means the connection is unusable; drop it and
//! connect again. [`ApiError::Reply`] means the server answered with an
//! unexpected shape; the connection is still in sync.
//!
//! # Example
//!
//! ```no_run
//! use mcpi_link_api::Minecraft;
//! use mcpi_link_channel::Endpoint;
//!
//! let mut mc = Minecraft::create(Endpoint::default()).unwrap();
//! mc.post_to_chat("Hello, Minecraft!").unwrap();
//! let pos = mc.player().get_tile_pos().unwrap();
//! mc.set_block(pos - mcpi_link_types::Vec3::new(0, 1, 0), "gold_block", None).unwrap();
//! for hit in mc.events().poll_block_hits().unwrap() {
//!     println!("{}", hit);
//! }
//! ```

pub mod camera;
pub mod error;
pub mod events;
pub mod positioner;
#[cfg(test)]
pub(crate) mod testing;
pub mod world;

pub use camera::CmdCamera;
pub use error::{ApiError, Result};
pub use events::CmdEvents;
pub use positioner::{CmdEntity, CmdPositioner, Entity, Scope};
pub use world::Minecraft;

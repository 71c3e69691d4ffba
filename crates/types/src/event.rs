//! World events returned by the event polling commands.
//!
//! Each poll drains the events the server has buffered since the previous
//! poll (or since `events.clear`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EntityId, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockEventKind {
    Hit,
}

/// A block was hit (struck with a sword) by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEvent {
    pub kind: BlockEventKind,
    pub pos: Vec3<i32>,
    /// Face of the block that was struck.
    pub face: i32,
    pub entity_id: EntityId,
}

impl BlockEvent {
    pub fn hit(pos: Vec3<i32>, face: i32, entity_id: EntityId) -> Self {
        Self {
            kind: BlockEventKind::Hit,
            pos,
            face,
            entity_id,
        }
    }
}

impl fmt::Display for BlockEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockEvent({:?}, {}, {}, {}, {}, {})",
            self.kind, self.pos.x, self.pos.y, self.pos.z, self.face, self.entity_id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatEventKind {
    Post,
}

/// A chat message was posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEvent {
    pub kind: ChatEventKind,
    pub entity_id: EntityId,
    pub message: String,
}

impl ChatEvent {
    pub fn post(entity_id: EntityId, message: impl Into<String>) -> Self {
        Self {
            kind: ChatEventKind::Post,
            entity_id,
            message: message.into(),
        }
    }
}

impl fmt::Display for ChatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChatEvent({:?}, {}, {})", self.kind, self.entity_id, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectileEventKind {
    Hit,
}

/// A projectile (arrow, snowball, ...) hit a block or an entity.
///
/// `shooter` and `victim` are names as reported by the server; `victim` is
/// empty when a block was hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectileEvent {
    pub kind: ProjectileEventKind,
    pub pos: Vec3<i32>,
    pub face: i32,
    pub shooter: String,
    pub victim: String,
}

impl ProjectileEvent {
    pub fn hit(
        pos: Vec3<i32>,
        face: i32,
        shooter: impl Into<String>,
        victim: impl Into<String>,
    ) -> Self {
        Self {
            kind: ProjectileEventKind::Hit,
            pos,
            face,
            shooter: shooter.into(),
            victim: victim.into(),
        }
    }
}

impl fmt::Display for ProjectileEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProjectileEvent({:?}, {}, {}, {}, {}, {})",
            self.kind, self.pos.x, self.pos.y, self.pos.z, self.shooter, self.victim
        )
    }
}

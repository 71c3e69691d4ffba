//! Event polling.
//!
//! Poll replies are `|`-separated records; empty records are skipped.
//!
//! | Command | Record layout |
//! |---------|---------------|
//! | `events.block.hits` | `x,y,z,face,entityId` |
//! | `events.chat.posts` | `entityId,message` (message may contain commas) |
//! | `events.projectile.hits` | `x,y,z,face,shooter,victim` |

use mcpi_link_channel::CommandSink;
use mcpi_link_protocol::args;
use mcpi_link_protocol::reply::{parse_number, records, split_fields, ReplyError};
use mcpi_link_types::{BlockEvent, ChatEvent, EntityId, ProjectileEvent, Vec3, FIELD_SEPARATOR};

use crate::error::{checked, Result};

const BLOCK_HITS: &str = "events.block.hits";
const CHAT_POSTS: &str = "events.chat.posts";
const PROJECTILE_HITS: &str = "events.projectile.hits";

pub struct CmdEvents<'a, S> {
    sink: &'a mut S,
}

impl<'a, S: CommandSink> CmdEvents<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Discard every buffered event.
    pub fn clear_all(&mut self) -> Result<()> {
        self.sink.send("events.clear", &args![])?;
        Ok(())
    }

    /// Blocks hit with a sword since the last poll.
    pub fn poll_block_hits(&mut self) -> Result<Vec<BlockEvent>> {
        let line = self.sink.send_receive(BLOCK_HITS, &args![])?;
        checked(BLOCK_HITS, records(&line).map(parse_block_hit).collect())
    }

    /// Chat messages posted since the last poll.
    pub fn poll_chat_posts(&mut self) -> Result<Vec<ChatEvent>> {
        let line = self.sink.send_receive(CHAT_POSTS, &args![])?;
        checked(CHAT_POSTS, records(&line).map(parse_chat_post).collect())
    }

    /// Projectile hits since the last poll.
    pub fn poll_projectile_hits(&mut self) -> Result<Vec<ProjectileEvent>> {
        let line = self.sink.send_receive(PROJECTILE_HITS, &args![])?;
        checked(
            PROJECTILE_HITS,
            records(&line).map(parse_projectile_hit).collect(),
        )
    }
}

fn parse_pos(x: &str, y: &str, z: &str, record: &str) -> std::result::Result<Vec3<i32>, ReplyError> {
    Ok(Vec3::new(
        parse_number(x, record)?,
        parse_number(y, record)?,
        parse_number(z, record)?,
    ))
}

pub fn parse_block_hit(record: &str) -> std::result::Result<BlockEvent, ReplyError> {
    let f = split_fields::<5>(record)?;
    Ok(BlockEvent::hit(
        parse_pos(f[0], f[1], f[2], record)?,
        parse_number(f[3], record)?,
        EntityId::from(f[4]),
    ))
}

pub fn parse_chat_post(record: &str) -> std::result::Result<ChatEvent, ReplyError> {
    let Some((id, message)) = record.split_once(FIELD_SEPARATOR) else {
        return Err(ReplyError::FieldCount {
            expected: 2,
            got: 1,
            line: record.to_string(),
        });
    };
    Ok(ChatEvent::post(EntityId::from(id), message))
}

pub fn parse_projectile_hit(record: &str) -> std::result::Result<ProjectileEvent, ReplyError> {
    let f = split_fields::<6>(record)?;
    Ok(ProjectileEvent::hit(
        parse_pos(f[0], f[1], f[2], record)?,
        parse_number(f[3], record)?,
        f[4],
        f[5],
    ))
}

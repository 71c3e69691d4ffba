//! World commands and the [`Minecraft`] entry point.

use mcpi_link_channel::{BlockingChannel, CommandSink, Endpoint};
use mcpi_link_protocol::reply::{list, parse_bool, parse_scalar, records};
use mcpi_link_protocol::{args, ReplyError};
use mcpi_link_types::{EntityId, SignFacing, Vec3};

use crate::camera::CmdCamera;
use crate::error::{checked, Result};
use crate::events::CmdEvents;
use crate::positioner::{CmdEntity, CmdPositioner, Entity, Scope};

/// Typed access to a running world server.
///
/// Owns the command sink; the command groups borrow it for the duration of
/// a call chain (`mc.player().get_pos()`).
pub struct Minecraft<S> {
    sink: S,
}

impl Minecraft<BlockingChannel> {
    /// Connect to `endpoint` after applying the `JRP_API_*` environment
    /// overrides.
    pub fn create(endpoint: Endpoint) -> Result<Self> {
        let endpoint = endpoint.with_env_overrides();
        log::debug!("connecting to {}", endpoint.addr());
        Ok(Self::new(BlockingChannel::connect(&endpoint)?))
    }
}

impl<S: CommandSink> Minecraft<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    pub fn camera(&mut self) -> CmdCamera<'_, S> {
        CmdCamera::new(&mut self.sink)
    }

    pub fn entity(&mut self) -> CmdEntity<'_, S> {
        CmdEntity::new(&mut self.sink)
    }

    /// Positioner commands for the player bound to this connection.
    pub fn player(&mut self) -> CmdPositioner<'_, S> {
        CmdPositioner::new(&mut self.sink, Scope::Player)
    }

    pub fn events(&mut self) -> CmdEvents<'_, S> {
        CmdEvents::new(&mut self.sink)
    }

    /// Block name at `pos` (floored).
    pub fn get_block(&mut self, pos: Vec3<f64>) -> Result<String> {
        Ok(self.sink.send_receive("world.getBlock", &args![pos.floor()])?)
    }

    /// Block name followed by its data fields.
    pub fn get_block_with_data(&mut self, pos: Vec3<f64>) -> Result<Vec<String>> {
        let line = self
            .sink
            .send_receive("world.getBlockWithData", &args![pos.floor()])?;
        Ok(line.split(',').map(str::to_string).collect())
    }

    /// Block names in the cuboid between two corners.
    pub fn get_blocks(&mut self, from: Vec3<i32>, to: Vec3<i32>) -> Result<Vec<String>> {
        let line = self.sink.send_receive("world.getBlocks", &args![from, to])?;
        Ok(list(&line).map(str::to_string).collect())
    }

    pub fn set_block(&mut self, pos: Vec3<i32>, block: &str, data: Option<i32>) -> Result<()> {
        self.sink.send("world.setBlock", &args![pos, block, data])?;
        Ok(())
    }

    /// Fill the cuboid between two corners.
    pub fn set_blocks(
        &mut self,
        from: Vec3<i32>,
        to: Vec3<i32>,
        block: &str,
        data: Option<i32>,
    ) -> Result<()> {
        self.sink
            .send("world.setBlocks", &args![from, to, block, data])?;
        Ok(())
    }

    /// Place a sign with up to four lines of text.
    pub fn set_sign(
        &mut self,
        pos: Vec3<i32>,
        sign_type: &str,
        facing: SignFacing,
        lines: &[&str],
    ) -> Result<()> {
        self.sink.send(
            "world.setSign",
            &args![pos, sign_type, facing.code(), lines],
        )?;
        Ok(())
    }

    /// Spawn an entity of `type_name` and return a handle to it.
    pub fn spawn_entity(&mut self, pos: Vec3<f64>, type_name: &str) -> Result<Entity> {
        let id = self
            .sink
            .send_receive("world.spawnEntity", &args![pos, type_name])?;
        Ok(Entity::new(EntityId::from(id), type_name))
    }

    pub fn spawn_particle(&mut self, pos: Vec3<f64>, particle: &str, data: Option<i32>) -> Result<()> {
        self.sink
            .send("world.spawnParticle", &args![pos, particle, data])?;
        Ok(())
    }

    /// Entities near `pos`; the reply is `name:id` items joined by commas.
    pub fn get_nearby_entities(&mut self, pos: Vec3<f64>) -> Result<Vec<Entity>> {
        const CMD: &str = "world.getNearbyEntities";
        let line = self.sink.send_receive(CMD, &args![pos])?;
        let parsed: std::result::Result<Vec<Entity>, ReplyError> = list(&line)
            .map(|item| match item.split_once(':') {
                Some((name, id)) => Ok(Entity::new(EntityId::from(id), name)),
                None => Err(ReplyError::FieldCount {
                    expected: 2,
                    got: 1,
                    line: line.clone(),
                }),
            })
            .collect();
        checked(CMD, parsed)
    }

    /// Remove an entity; returns the server's reply verbatim.
    pub fn remove_entity(&mut self, id: &EntityId) -> Result<String> {
        Ok(self.sink.send_receive("world.removeEntity", &args![id])?)
    }

    /// Y of the highest non-air block at column (x, z).
    pub fn get_height(&mut self, x: f64, z: f64) -> Result<i32> {
        const CMD: &str = "world.getHeight";
        let line = self
            .sink
            .send_receive(CMD, &args![x.floor() as i32, z.floor() as i32])?;
        checked(CMD, parse_scalar(&line))
    }

    /// Ids of every connected player.
    pub fn get_player_entity_ids(&mut self) -> Result<Vec<EntityId>> {
        let line = self.sink.send_receive("world.getPlayerIds", &args![])?;
        Ok(records(&line).map(EntityId::from).collect())
    }

    pub fn get_player_entity_id(&mut self, name: &str) -> Result<EntityId> {
        let id = self.sink.send_receive("world.getPlayerId", &args![name])?;
        Ok(EntityId::from(id))
    }

    pub fn save_checkpoint(&mut self) -> Result<()> {
        self.sink.send("world.checkpoint.save", &args![])?;
        Ok(())
    }

    pub fn restore_checkpoint(&mut self) -> Result<()> {
        self.sink.send("world.checkpoint.restore", &args![])?;
        Ok(())
    }

    /// Post `msg` to chat. Commas and newlines in `msg` are not escaped.
    pub fn post_to_chat(&mut self, msg: &str) -> Result<()> {
        self.sink.send("chat.post", &args![msg])?;
        Ok(())
    }

    /// Toggle a world setting such as `world_immutable` or `nametags_visible`.
    pub fn setting(&mut self, key: &str, enabled: bool) -> Result<()> {
        self.sink
            .send("world.setting", &args![key, i32::from(enabled)])?;
        Ok(())
    }

    /// Bind the `player.*` commands to the player called `name`.
    ///
    /// Returns whether the server found that player.
    pub fn set_player(&mut self, name: &str) -> Result<bool> {
        const CMD: &str = "setPlayer";
        let line = self.sink.send_receive(CMD, &args![name])?;
        checked(CMD, parse_bool(&line))
    }
}

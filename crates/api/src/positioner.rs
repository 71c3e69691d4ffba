//! Position, direction and orientation commands for entities and the player.
//!
//! The same operations exist under two namespaces:
//!
//! | Scope | Command | Arguments |
//! |-------|---------|-----------|
//! | player | `player.<op>` | operation arguments only |
//! | entity | `entity.<op>` | entity id, then operation arguments |
//!
//! [`Scope`] selects between the two; both go through the same encoder.

use mcpi_link_channel::CommandSink;
use mcpi_link_protocol::reply::{parse_scalar, parse_vec3};
use mcpi_link_protocol::{args, Arg};
use mcpi_link_types::{EntityId, Vec3};

use crate::error::{checked, Result};

/// Which namespace a positioner command is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The player bound to this connection (`player.*`, no id).
    Player,
    /// A specific entity (`entity.*`, id first).
    Entity(EntityId),
}

impl Scope {
    pub fn namespace(&self) -> &'static str {
        match self {
            Scope::Player => "player",
            Scope::Entity(_) => "entity",
        }
    }

    /// Full command name for `op`, e.g. `entity.getPos`.
    pub fn command(&self, op: &str) -> String {
        format!("{}.{}", self.namespace(), op)
    }

    /// Arguments for `op`: the entity id (entity scope only) followed by `rest`.
    pub fn args(&self, rest: &[Arg]) -> Vec<Arg> {
        match self {
            Scope::Player => rest.to_vec(),
            Scope::Entity(id) => {
                let mut out = Vec::with_capacity(rest.len() + 1);
                out.push(Arg::from(id));
                out.extend_from_slice(rest);
                out
            }
        }
    }
}

/// Positioner commands bound to one scope.
pub struct CmdPositioner<'a, S> {
    sink: &'a mut S,
    scope: Scope,
}

impl<'a, S: CommandSink> CmdPositioner<'a, S> {
    pub fn new(sink: &'a mut S, scope: Scope) -> Self {
        Self { sink, scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    fn send(&mut self, op: &str, rest: &[Arg]) -> Result<()> {
        let name = self.scope.command(op);
        self.sink.send(&name, &self.scope.args(rest))?;
        Ok(())
    }

    /// Returns the command name alongside the reply, for error context.
    fn query(&mut self, op: &str) -> Result<(String, String)> {
        let name = self.scope.command(op);
        let line = self.sink.send_receive(&name, &self.scope.args(&[]))?;
        Ok((name, line))
    }

    /// Exact position.
    pub fn get_pos(&mut self) -> Result<Vec3<f64>> {
        let (cmd, line) = self.query("getPos")?;
        checked(&cmd, parse_vec3(&line))
    }

    pub fn set_pos(&mut self, pos: Vec3<f64>) -> Result<()> {
        self.send("setPos", &args![pos])
    }

    /// Position of the block the entity stands in.
    pub fn get_tile_pos(&mut self) -> Result<Vec3<i32>> {
        let (cmd, line) = self.query("getTile")?;
        checked(&cmd, parse_vec3(&line))
    }

    /// Move to the block containing `pos` (coordinates are floored).
    pub fn set_tile_pos(&mut self, pos: Vec3<f64>) -> Result<()> {
        self.send("setTile", &args![pos.floor()])
    }

    pub fn get_direction(&mut self) -> Result<Vec3<f64>> {
        let (cmd, line) = self.query("getDirection")?;
        checked(&cmd, parse_vec3(&line))
    }

    pub fn set_direction(&mut self, dir: Vec3<f64>) -> Result<()> {
        self.send("setDirection", &args![dir])
    }

    /// Yaw in degrees.
    pub fn get_rotation(&mut self) -> Result<f64> {
        let (cmd, line) = self.query("getRotation")?;
        checked(&cmd, parse_scalar(&line))
    }

    pub fn set_rotation(&mut self, yaw: f64) -> Result<()> {
        self.send("setRotation", &args![yaw])
    }

    pub fn get_pitch(&mut self) -> Result<f64> {
        let (cmd, line) = self.query("getPitch")?;
        checked(&cmd, parse_scalar(&line))
    }

    pub fn set_pitch(&mut self, pitch: f64) -> Result<()> {
        self.send("setPitch", &args![pitch])
    }

    /// Toggle a setting such as `autojump`.
    ///
    /// The server applies settings to its own player binding, so no entity
    /// id is sent in either scope.
    pub fn setting(&mut self, key: &str, enabled: bool) -> Result<()> {
        let name = self.scope.command("setting");
        self.sink.send(&name, &args![key, i32::from(enabled)])?;
        Ok(())
    }
}

/// Entity commands that are not about position.
pub struct CmdEntity<'a, S> {
    sink: &'a mut S,
}

impl<'a, S: CommandSink> CmdEntity<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Name of the entity (the player name for players).
    pub fn get_name(&mut self, id: &EntityId) -> Result<String> {
        Ok(self.sink.send_receive("entity.getName", &args![id])?)
    }

    pub fn remove(&mut self, id: &EntityId) -> Result<()> {
        self.sink.send("entity.remove", &args![id])?;
        Ok(())
    }

    /// Positioner commands for entity `id`.
    pub fn at(self, id: EntityId) -> CmdPositioner<'a, S> {
        CmdPositioner::new(self.sink, Scope::Entity(id))
    }
}

/// An entity known to exist on the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub id: EntityId,
    /// Type (or name) the server reported for it.
    pub type_name: String,
}

impl Entity {
    pub fn new(id: EntityId, type_name: impl Into<String>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
        }
    }

    /// Positioner commands for this entity over `sink`.
    pub fn positioner<'a, S: CommandSink>(&self, sink: &'a mut S) -> CmdPositioner<'a, S> {
        CmdPositioner::new(sink, Scope::Entity(self.id.clone()))
    }

    pub fn remove<S: CommandSink>(&self, sink: &mut S) -> Result<()> {
        CmdEntity::new(sink).remove(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::ScriptedSink;
    use mcpi_link_protocol::ReplyError;

    #[test]
    fn player_scope_sends_no_id() {
        let mut sink = ScriptedSink::with_replies(["1.5,64.0,-2.0"]);
        let pos = CmdPositioner::new(&mut sink, Scope::Player).get_pos().unwrap();
        assert_eq!(pos, Vec3::new(1.5, 64.0, -2.0));
        assert_eq!(sink.sent(), ["player.getPos"]);
    }

    #[test]
    fn entity_scope_sends_id_first() {
        let mut sink = ScriptedSink::new();
        let id = EntityId::from("c0ffee");
        CmdPositioner::new(&mut sink, Scope::Entity(id))
            .set_pos(Vec3::new(1.0, 2.5, 3.0))
            .unwrap();
        assert_eq!(sink.sent(), ["entity.setPos,c0ffee,1.0,2.5,3.0"]);
    }

    #[test]
    fn set_tile_pos_floors_coordinates() {
        let mut sink = ScriptedSink::new();
        CmdPositioner::new(&mut sink, Scope::Player)
            .set_tile_pos(Vec3::new(1.9, 64.0, -0.1))
            .unwrap();
        assert_eq!(sink.last_sent(), Some("player.setTile,1,64,-1"));
    }

    #[test]
    fn tile_pos_parses_integers() {
        let mut sink = ScriptedSink::with_replies(["12,34,56"]);
        let tile = CmdPositioner::new(&mut sink, Scope::Entity("e".into()))
            .get_tile_pos()
            .unwrap();
        assert_eq!(tile, Vec3::new(12, 34, 56));
        assert_eq!(sink.last_sent(), Some("entity.getTile,e"));
    }

    #[test]
    fn rotation_pitch_and_direction() {
        let mut sink = ScriptedSink::with_replies(["90.0", "-15.5", "0.0,0.0,1.0"]);
        let mut p = CmdPositioner::new(&mut sink, Scope::Player);
        assert_eq!(p.get_rotation().unwrap(), 90.0);
        assert_eq!(p.get_pitch().unwrap(), -15.5);
        assert_eq!(p.get_direction().unwrap(), Vec3::new(0.0, 0.0, 1.0));
        p.set_rotation(45.0).unwrap();
        p.set_pitch(10.0).unwrap();
        p.set_direction(Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(
            sink.sent()[3..],
            [
                "player.setRotation,45.0",
                "player.setPitch,10.0",
                "player.setDirection,1.0,0.0,0.0"
            ]
        );
    }

    #[test]
    fn setting_maps_bool_to_int() {
        let mut sink = ScriptedSink::new();
        let mut p = CmdPositioner::new(&mut sink, Scope::Player);
        p.setting("autojump", true).unwrap();
        p.setting("autojump", false).unwrap();
        assert_eq!(sink.sent(), ["player.setting,autojump,1", "player.setting,autojump,0"]);
    }

    #[test]
    fn entity_setting_sends_no_id() {
        let mut sink = ScriptedSink::new();
        CmdPositioner::new(&mut sink, Scope::Entity("e5".into()))
            .setting("autojump", true)
            .unwrap();
        assert_eq!(sink.sent(), ["entity.setting,autojump,1"]);
    }

    #[test]
    fn malformed_position_names_the_command() {
        let mut sink = ScriptedSink::with_replies(["1.0,2.0"]);
        let err = CmdPositioner::new(&mut sink, Scope::Player).get_pos().unwrap_err();
        match err {
            ApiError::Reply { command, source } => {
                assert_eq!(command, "player.getPos");
                assert!(matches!(source, ReplyError::FieldCount { expected: 3, got: 2, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn entity_commands() {
        let mut sink = ScriptedSink::with_replies(["Steve"]);
        let id = EntityId::from("42");
        assert_eq!(CmdEntity::new(&mut sink).get_name(&id).unwrap(), "Steve");
        CmdEntity::new(&mut sink).remove(&id).unwrap();
        assert_eq!(sink.sent(), ["entity.getName,42", "entity.remove,42"]);
    }

    #[test]
    fn entity_handle_binds_its_id() {
        let mut sink = ScriptedSink::with_replies(["3.0,4.0,5.0"]);
        let zombie = Entity::new("z-1".into(), "ZOMBIE");
        assert_eq!(
            zombie.positioner(&mut sink).get_pos().unwrap(),
            Vec3::new(3.0, 4.0, 5.0)
        );
        zombie.remove(&mut sink).unwrap();
        assert_eq!(sink.sent(), ["entity.getPos,z-1", "entity.remove,z-1"]);
    }

    #[test]
    fn channel_failure_is_fatal() {
        let mut sink = ScriptedSink::new();
        let err = CmdPositioner::new(&mut sink, Scope::Player).get_pitch().unwrap_err();
        assert!(err.is_fatal());
    }
}

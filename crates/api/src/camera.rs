//! Camera mode and position.

use mcpi_link_channel::CommandSink;
use mcpi_link_protocol::args;
use mcpi_link_types::{EntityId, Vec3};

use crate::error::Result;

pub struct CmdCamera<'a, S> {
    sink: &'a mut S,
}

impl<'a, S: CommandSink> CmdCamera<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Normal first-person view, of `entity` or of the player when `None`.
    pub fn set_normal(&mut self, entity: Option<&EntityId>) -> Result<()> {
        self.sink.send("camera.mode.setNormal", &args![entity])?;
        Ok(())
    }

    /// Fixed view; see [`set_pos`](Self::set_pos).
    pub fn set_fixed(&mut self) -> Result<()> {
        self.sink.send("camera.mode.setFixed", &args![])?;
        Ok(())
    }

    /// Follow `entity`, or the player when `None`.
    pub fn set_follow(&mut self, entity: Option<&EntityId>) -> Result<()> {
        self.sink.send("camera.mode.setFollow", &args![entity])?;
        Ok(())
    }

    pub fn set_pos(&mut self, pos: Vec3<f64>) -> Result<()> {
        self.sink.send("camera.setPos", &args![pos])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedSink;

    #[test]
    fn camera_commands() {
        let mut sink = ScriptedSink::new();
        let id = EntityId::from("e7");
        {
            let mut cam = CmdCamera::new(&mut sink);
            cam.set_normal(None).unwrap();
            cam.set_normal(Some(&id)).unwrap();
            cam.set_fixed().unwrap();
            cam.set_follow(Some(&id)).unwrap();
            cam.set_pos(Vec3::new(0.0, 80.0, 0.5)).unwrap();
        }
        assert_eq!(
            sink.sent(),
            [
                "camera.mode.setNormal",
                "camera.mode.setNormal,e7",
                "camera.mode.setFixed",
                "camera.mode.setFollow,e7",
                "camera.setPos,0.0,80.0,0.5",
            ]
        );
    }
}

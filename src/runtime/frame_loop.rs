use crate::core::CancelToken;
use crate::render::Surface;
use crate::simulation::SceneCore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Frame rendered; schedule the next one
    Continue,
    /// Cancelled; do not reschedule
    Stopped,
}

pub struct FrameLoop {
    scene: SceneCore,
    token: CancelToken,
}

impl FrameLoop {
    pub fn new(scene: SceneCore) -> Self {
        Self {
            scene,
            token: CancelToken::new(),
        }
    }

    /// Token that stops this loop when cancelled
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn scene(&self) -> &SceneCore {
        &self.scene
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Render one frame unless cancelled. A stopped loop leaves the scene untouched.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> LoopState {
        if self.token.is_cancelled() {
            return LoopState::Stopped;
        }
        self.scene.step(surface);
        LoopState::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GridConfig;
    use crate::render::FrameRecorder;

    fn frame_loop() -> FrameLoop {
        FrameLoop::new(SceneCore::with_seed(200, 100, GridConfig::default(), 8))
    }

    #[test]
    fn ticks_until_cancelled() {
        let mut lp = frame_loop();
        let mut rec = FrameRecorder::new();
        let token = lp.token();

        for _ in 0..10 {
            assert_eq!(lp.tick(&mut rec), LoopState::Continue);
        }
        assert_eq!(lp.scene().frame(), 10);

        token.cancel();
        assert!(lp.is_stopped());
        let before = rec.len();
        for _ in 0..10 {
            assert_eq!(lp.tick(&mut rec), LoopState::Stopped);
        }
        assert_eq!(lp.scene().frame(), 10);
        assert_eq!(rec.len(), before);
    }

    #[test]
    fn resize_reaches_the_scene() {
        let mut lp = frame_loop();
        lp.resize(640, 480);
        assert_eq!(lp.scene().width(), 640.0);
        assert_eq!(lp.scene().height(), 480.0);
    }
}

//! The session controller.
//!
//! Stage flow:
//!
//! ```text
//!   Draw --confirm--> Clone --by-level--> ByLevel
//!                       ^  \--spray-----> Spray
//!                       |                   |
//!                       +----confirm--------+   (re-entering Clone drops all clones)
//! ```
//!
//! Commands that make no sense in the active stage are ignored.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{SeedPolygon, SessionConfig};
use crate::geometry::{AffineTransform, ColorRgba, Point2D};
use crate::ifs::{
    generate_by_level, random_color_offset, ChaosGame, IfsCode, TransformCollector,
};
use crate::input::Command;
use crate::render::Frame;
use crate::scene::{PrimitiveKind, Scene, SceneStore, ShapeBatch, Stage};

/// Live projection right after entering Clone or placing a clone: a small
/// offset so the green outline is visible beside the seed.
pub fn initial_live_projection() -> AffineTransform {
    AffineTransform::translate(0.01, 0.01)
}

/// Result of handling a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; the active frame should be redrawn
    Applied,
    /// Not valid in the current state; nothing changed
    Ignored,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    stage: Stage,
    seed: SeedPolygon,
    collector: TransformCollector,
    live: AffineTransform,
    level: u32,
    scenes: SceneStore,
    color_offset: u8,
    rng: StdRng,
}

impl Session {
    /// Start in the Draw stage with an empty seed.
    ///
    /// The branch color offset is rolled here and kept for the lifetime of
    /// the session, full resets included.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let color_offset = random_color_offset(&mut rng);
        debug!("session started, color offset {}", color_offset);

        Self {
            level: config.initial_level.max(1),
            config,
            stage: Stage::Draw,
            seed: SeedPolygon::new(),
            collector: TransformCollector::new(),
            live: AffineTransform::identity(),
            scenes: SceneStore::new(),
            color_offset,
            rng,
        }
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::ClickAt(point) => self.click_at(point),
            Command::Nudge(_) | Command::ScaleAxis(..) | Command::Rotate(_) => {
                match command.edit_transform(self.config.edit_step) {
                    Some(edit) => self.edit_live(&edit),
                    None => Outcome::Ignored,
                }
            }
            Command::RecallLastTransform => self.recall_last(),
            Command::DecrementLevel => self.change_level(-1),
            Command::IncrementLevel => self.change_level(1),
            Command::ConfirmOrCommit => self.confirm_or_commit(),
            Command::RenderByLevel => self.render_by_level(),
            Command::RenderSpray => self.render_spray(),
            Command::FullReset => self.full_reset(),
        };
        debug!(
            "{} in {} stage: {:?}",
            command.name(),
            self.stage,
            outcome
        );
        outcome
    }

    // ====================================================================
    // Accessors
    // ====================================================================

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn seed(&self) -> &SeedPolygon {
        &self.seed
    }

    pub fn transforms(&self) -> &TransformCollector {
        &self.collector
    }

    pub fn live_projection(&self) -> AffineTransform {
        self.live
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn color_offset(&self) -> u8 {
        self.color_offset
    }

    pub fn scenes(&self) -> &SceneStore {
        &self.scenes
    }

    /// Scene of the active stage
    pub fn active_scene(&self) -> Option<&Scene> {
        self.scenes.scene(self.stage)
    }

    /// Vertices held by the active stage's scene
    pub fn vertex_count(&self) -> usize {
        self.scenes.vertex_count(self.stage)
    }

    pub fn ifs_codes(&self) -> Vec<IfsCode> {
        self.collector.ifs_codes()
    }

    /// Everything a renderer needs to draw the active stage
    pub fn frame(&self) -> Frame<'_> {
        match self.active_scene() {
            Some(scene) => Frame::new(self.stage, scene, self.live),
            None => Frame::empty(self.stage, self.live),
        }
    }

    // ====================================================================
    // Draw stage
    // ====================================================================

    fn click_at(&mut self, point: Point2D) -> Outcome {
        if self.stage != Stage::Draw || !self.seed.push(point) {
            return Outcome::Ignored;
        }
        self.rebuild_draw_scene();
        Outcome::Applied
    }

    fn rebuild_draw_scene(&mut self) {
        let mut scene = Scene::new();
        if !self.seed.is_empty() {
            scene.push(&self.seed.outline());
        }
        self.scenes.replace_stage(Stage::Draw, scene);
    }

    // ====================================================================
    // Clone stage
    // ====================================================================

    fn live_outline(&self) -> ShapeBatch {
        ShapeBatch::uniform(
            PrimitiveKind::PolygonOutline,
            self.seed.vertices().to_vec(),
            ColorRgba::GREEN,
            true,
        )
    }

    fn enter_clone_stage(&mut self) {
        self.stage = Stage::Clone;
        self.collector.reset();
        self.live = initial_live_projection();

        let mut scene = Scene::new();
        scene.push(&self.seed.outline());
        scene.push(&self.live_outline());
        self.scenes.replace_stage(Stage::Clone, scene);
        debug!("entered clone stage with {} seed vertices", self.seed.len());
    }

    /// Swap the live outline for a fixed clone and start a fresh live
    /// outline on top.
    fn commit_clone(&mut self) {
        let projected = self.live.apply_all(self.seed.vertices());
        self.scenes.remove_last_shape(Stage::Clone);
        self.scenes
            .add_shape(Stage::Clone, &self.seed.outline_of(projected));
        self.collector.commit(&self.live);
        let live_outline = self.live_outline();
        self.scenes.add_shape(Stage::Clone, &live_outline);
        self.live = initial_live_projection();
        debug!("clone {} placed", self.collector.len());
    }

    fn confirm_or_commit(&mut self) -> Outcome {
        if self.stage != Stage::Clone {
            self.enter_clone_stage();
            return Outcome::Applied;
        }
        if self.collector.is_full() {
            return Outcome::Ignored;
        }
        self.commit_clone();
        Outcome::Applied
    }

    fn edit_live(&mut self, edit: &AffineTransform) -> Outcome {
        if self.stage != Stage::Clone {
            return Outcome::Ignored;
        }
        self.live.pre_multiply(edit);
        Outcome::Applied
    }

    fn recall_last(&mut self) -> Outcome {
        match self.collector.last() {
            Some(last) if self.stage == Stage::Clone => {
                self.live = last.deep_copy();
                Outcome::Applied
            }
            _ => Outcome::Ignored,
        }
    }

    // ====================================================================
    // Fractal stages
    // ====================================================================

    fn change_level(&mut self, delta: i32) -> Outcome {
        let next = if delta < 0 {
            self.level.checked_sub(delta.unsigned_abs())
        } else {
            self.level.checked_add(delta.unsigned_abs())
        };
        match next {
            Some(level) if level >= 1 => {
                self.level = level;
                if self.stage == Stage::ByLevel {
                    self.rebuild_by_level();
                }
                Outcome::Applied
            }
            _ => Outcome::Ignored,
        }
    }

    fn can_render(&self) -> bool {
        self.stage.allows_rendering() && !self.collector.is_empty()
    }

    fn render_by_level(&mut self) -> Outcome {
        if !self.can_render() {
            return Outcome::Ignored;
        }
        self.stage = Stage::ByLevel;
        self.rebuild_by_level();
        Outcome::Applied
    }

    fn rebuild_by_level(&mut self) {
        let shapes = generate_by_level(
            self.seed.vertices(),
            self.level,
            ColorRgba::DARK_GRAY,
            self.collector.all(),
            self.color_offset,
        );
        let mut scene = Scene::new();
        for shape in &shapes {
            scene.push(shape);
        }
        debug!(
            "by-level scene rebuilt: level {}, {} shapes",
            self.level,
            scene.len()
        );
        self.scenes.replace_stage(Stage::ByLevel, scene);
    }

    /// Chaos game over the committed clones, every one equally likely
    fn spray_game(&self) -> ChaosGame<'_> {
        ChaosGame::uniform(self.collector.all())
    }

    fn render_spray(&mut self) -> Outcome {
        if !self.can_render() {
            return Outcome::Ignored;
        }
        self.stage = Stage::Spray;

        // Borrow only the collector so `self.rng` can be borrowed mutably
        let game = ChaosGame::uniform(self.collector.all());
        let batch = game.generate_batch(self.config.spray_points, &mut self.rng);

        let mut scene = Scene::new();
        scene.push(&batch);
        self.scenes.replace_stage(Stage::Spray, scene);
        Outcome::Applied
    }

    // ====================================================================
    // Reset
    // ====================================================================

    fn full_reset(&mut self) -> Outcome {
        self.stage = Stage::Draw;
        self.seed.clear();
        self.collector.reset();
        self.live = AffineTransform::identity();
        self.level = self.config.initial_level.max(1);
        self.scenes = SceneStore::new();
        debug!("session reset");
        Outcome::Applied
    }
}

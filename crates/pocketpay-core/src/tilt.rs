//! Orientation smoothing engine for the 3D tilt effect.
//!
//! Raw device-orientation readings (`beta` is front/back, `gamma` is
//! left/right, both in degrees) are turned into a target rotation:
//!
//! 1. divide by `normalize_factor`
//! 2. add the per-axis offset
//! 3. scale by `max_tilt / 90`
//! 4. clamp to `[-max_tilt, max_tilt]`
//! 5. snap to zero inside the dead zone
//!
//! Each animation frame then moves the current rotation towards the target
//! with `current += (target - current) * smoothing`, independently per axis.
//! Several samples arriving inside one frame coalesce into one update.
//!
//! Sensor access goes through [`MotionSource`], a small capability
//! interface, wrapped by [`MotionGate`] which withholds samples until access
//! has been granted.

use std::future::Future;

use crate::error::{WalletError, WalletResult};
use crate::frame::{FrameGate, FrameTicket};

/// Distance below which the smoothed value snaps onto its target.
const SETTLE_EPSILON: f64 = 0.01;

/// One raw device-orientation reading, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Deserialize)]
pub struct TiltSample {
    pub beta: f64,
    pub gamma: f64,
}

impl TiltSample {
    pub fn new(beta: f64, gamma: f64) -> Self {
        Self { beta, gamma }
    }
}

/// Smoothed rotation plus the derived drop-shadow offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    /// Rotation around the X axis (driven by `beta`), degrees
    pub rotate_x: f64,
    /// Rotation around the Y axis (driven by `gamma`), degrees
    pub rotate_y: f64,
    /// Horizontal shadow offset, px
    pub shadow_x: f64,
    /// Vertical shadow offset, px
    pub shadow_y: f64,
}

impl TiltState {
    /// True when the card is flat (no sample has moved it, or it has been reset).
    pub fn is_at_rest(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// Inline `transform` value for the tilted element.
    pub fn transform_css(&self, perspective_px: u32) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            perspective_px, self.rotate_x, self.rotate_y
        )
    }

    /// Inline `box-shadow` value following the tilt.
    pub fn shadow_css(&self, color: &str) -> String {
        format!(
            "{:.1}px {:.1}px 32px {}",
            self.shadow_x, self.shadow_y, color
        )
    }
}

/// Tunables for the smoothing pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct TiltConfig {
    /// Output bound in degrees; rotation stays in `[-max_tilt, max_tilt]`
    pub max_tilt: f64,
    /// Raw readings are divided by this before anything else
    pub normalize_factor: f64,
    /// Added to normalized beta (typical hold angle compensation)
    pub offset_beta: f64,
    /// Added to normalized gamma
    pub offset_gamma: f64,
    /// Targets with a smaller magnitude snap to exactly zero
    pub dead_zone: f64,
    /// Fraction of the remaining distance covered per frame, in (0, 1]
    pub smoothing: f64,
    /// px of shadow per degree of rotation
    pub shadow_scale: f64,
    /// Resting vertical shadow offset, px
    pub shadow_base_y: f64,
    /// Shadow offsets stay in `[-shadow_max, shadow_max]`
    pub shadow_max: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt: 15.0,
            normalize_factor: 1.0,
            offset_beta: -45.0,
            offset_gamma: 0.0,
            dead_zone: 0.5,
            smoothing: 0.1,
            shadow_scale: 1.0,
            shadow_base_y: 8.0,
            shadow_max: 20.0,
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> WalletResult<()> {
        if !(self.max_tilt > 0.0) {
            return Err(WalletError::InvalidConfig(format!(
                "max_tilt must be positive, got {}",
                self.max_tilt
            )));
        }
        if !(self.normalize_factor > 0.0) {
            return Err(WalletError::InvalidConfig(format!(
                "normalize_factor must be positive, got {}",
                self.normalize_factor
            )));
        }
        if !(self.dead_zone >= 0.0) {
            return Err(WalletError::InvalidConfig(format!(
                "dead_zone must not be negative, got {}",
                self.dead_zone
            )));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(WalletError::InvalidConfig(format!(
                "smoothing must be in (0, 1], got {}",
                self.smoothing
            )));
        }
        if !(self.shadow_max >= 0.0) {
            return Err(WalletError::InvalidConfig(format!(
                "shadow_max must not be negative, got {}",
                self.shadow_max
            )));
        }
        Ok(())
    }
}

/// Per-component smoothing engine. One instance per mounted tilt card.
#[derive(Debug, Clone)]
pub struct TiltEngine {
    config: TiltConfig,
    target: (f64, f64),
    state: TiltState,
    frames: FrameGate,
}

impl TiltEngine {
    pub fn new(config: TiltConfig) -> WalletResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: TiltConfig) -> Self {
        let mut engine = Self {
            config,
            target: (0.0, 0.0),
            state: TiltState::default(),
            frames: FrameGate::new(),
        };
        engine.refresh_shadow();
        engine
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn state(&self) -> TiltState {
        self.state
    }

    /// Current (rotate_x, rotate_y) target the engine is easing towards.
    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    /// Map a raw sample onto a clamped, dead-zoned target rotation.
    pub fn target_for(&self, sample: TiltSample) -> (f64, f64) {
        let cfg = &self.config;
        let scale = cfg.max_tilt / 90.0;
        let axis = |raw: f64, offset: f64| {
            if !raw.is_finite() {
                return 0.0;
            }
            let v = (raw / cfg.normalize_factor + offset) * scale;
            let v = v.clamp(-cfg.max_tilt, cfg.max_tilt);
            if v.abs() < cfg.dead_zone {
                0.0
            } else {
                v
            }
        };
        (
            axis(sample.beta, cfg.offset_beta),
            axis(sample.gamma, cfg.offset_gamma),
        )
    }

    /// Record a new sample and reschedule the pending frame.
    pub fn push_sample(&mut self, sample: TiltSample) -> FrameTicket {
        self.target = self.target_for(sample);
        self.frames.request()
    }

    /// Ticket the next frame callback should fire, if work is pending.
    pub fn pending_frame(&self) -> Option<FrameTicket> {
        self.frames.pending()
    }

    /// Run one smoothing step for `ticket`.
    ///
    /// Returns `None` when the ticket was superseded or cancelled. While the
    /// state has not settled on its target, another frame is requested.
    pub fn on_frame(&mut self, ticket: FrameTicket) -> Option<TiltState> {
        if !self.frames.fire(ticket) {
            return None;
        }
        let k = self.config.smoothing;
        let step = |current: f64, target: f64| {
            let next = current + (target - current) * k;
            if (target - next).abs() < SETTLE_EPSILON {
                target
            } else {
                next
            }
        };
        self.state.rotate_x = step(self.state.rotate_x, self.target.0);
        self.state.rotate_y = step(self.state.rotate_y, self.target.1);
        self.refresh_shadow();

        if !self.is_settled() {
            self.frames.request();
        }
        Some(self.state)
    }

    /// True once the smoothed rotation has reached its target.
    pub fn is_settled(&self) -> bool {
        self.state.rotate_x == self.target.0 && self.state.rotate_y == self.target.1
    }

    /// Return to rest and drop any pending frame.
    pub fn reset(&mut self) {
        self.target = (0.0, 0.0);
        self.state = TiltState::default();
        self.frames.cancel();
        self.refresh_shadow();
    }

    /// Drop the pending frame without touching the state (teardown).
    pub fn cancel_frame(&mut self) {
        self.frames.cancel();
    }

    fn refresh_shadow(&mut self) {
        let cfg = &self.config;
        let max = cfg.shadow_max;
        self.state.shadow_x = (-self.state.rotate_y * cfg.shadow_scale).clamp(-max, max);
        self.state.shadow_y =
            (cfg.shadow_base_y + self.state.rotate_x * cfg.shadow_scale).clamp(-max, max);
    }
}

impl Default for TiltEngine {
    fn default() -> Self {
        Self::with_config(TiltConfig::default())
    }
}

/// Outcome of asking the platform for motion-sensor access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPermission {
    /// Not asked yet; a user gesture must trigger the request
    #[default]
    Prompt,
    Granted,
    Denied,
    /// The platform has no orientation sensor
    Unsupported,
}

impl MotionPermission {
    pub fn is_granted(&self) -> bool {
        matches!(self, MotionPermission::Granted)
    }
}

/// Capability interface over a platform motion sensor.
pub trait MotionSource {
    /// Whether the platform exposes orientation events at all.
    fn supported(&self) -> bool;

    /// Whether access must be requested from inside a user gesture.
    fn requires_gesture(&self) -> bool {
        false
    }

    /// One-shot access request.
    fn request_access(&mut self) -> impl Future<Output = MotionPermission>;

    /// Next reading, or `None` once the source has ended.
    fn next_sample(&mut self) -> impl Future<Output = Option<TiltSample>>;
}

/// Binary permission gate in front of a [`MotionSource`].
///
/// No sample passes until access is granted; a denied or unsupported source
/// yields nothing, which leaves the tilt effect at rest.
#[derive(Debug)]
pub struct MotionGate<S> {
    source: S,
    permission: MotionPermission,
}

impl<S: MotionSource> MotionGate<S> {
    pub fn new(source: S) -> Self {
        let permission = if source.supported() {
            MotionPermission::Prompt
        } else {
            MotionPermission::Unsupported
        };
        Self { source, permission }
    }

    pub fn permission(&self) -> MotionPermission {
        self.permission
    }

    /// True when the caller must show a button to trigger [`Self::request`].
    pub fn needs_gesture(&self) -> bool {
        self.permission == MotionPermission::Prompt && self.source.requires_gesture()
    }

    /// Request access once. Later calls return the settled answer.
    pub async fn request(&mut self) -> MotionPermission {
        if self.permission == MotionPermission::Prompt {
            self.permission = self.source.request_access().await;
            tracing::info!(permission = ?self.permission, "motion access decided");
        }
        self.permission
    }

    /// Next sample, or `None` when access is missing or the source ended.
    pub async fn next(&mut self) -> Option<TiltSample> {
        if !self.permission.is_granted() {
            return None;
        }
        self.source.next_sample().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn engine() -> TiltEngine {
        TiltEngine::new(TiltConfig {
            offset_beta: 0.0,
            ..TiltConfig::default()
        })
        .unwrap()
    }

    fn run_until_settled(engine: &mut TiltEngine) -> usize {
        let mut frames = 0;
        while let Some(ticket) = engine.pending_frame() {
            engine.on_frame(ticket);
            frames += 1;
            assert!(frames < 10_000, "engine never settled");
        }
        frames
    }

    #[test]
    fn starts_at_rest() {
        let e = engine();
        assert!(e.state().is_at_rest());
        assert!(e.pending_frame().is_none());
        assert_eq!(e.state().shadow_y, 8.0);
    }

    #[test]
    fn target_scales_and_clamps() {
        let e = engine();
        // 90 degrees maps to max_tilt
        assert_eq!(e.target_for(TiltSample::new(90.0, -90.0)), (15.0, -15.0));
        // far beyond the sensor range still clamps
        assert_eq!(e.target_for(TiltSample::new(540.0, -720.0)), (15.0, -15.0));
        // 30 degrees -> 5
        let (x, _) = e.target_for(TiltSample::new(30.0, 0.0));
        assert!((x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn offset_applies_before_scaling() {
        let e = TiltEngine::new(TiltConfig::default()).unwrap();
        // phone held at the typical 45 degree angle is flat
        assert_eq!(e.target_for(TiltSample::new(45.0, 0.0)), (0.0, 0.0));
    }

    #[test]
    fn dead_zone_snaps_to_zero() {
        let e = engine();
        // 2 degrees -> 0.333 which is below the 0.5 dead zone
        assert_eq!(e.target_for(TiltSample::new(2.0, -2.0)), (0.0, 0.0));
    }

    #[test]
    fn non_finite_samples_are_flat() {
        let e = engine();
        assert_eq!(e.target_for(TiltSample::new(f64::NAN, f64::INFINITY)), (0.0, 0.0));
    }

    #[test]
    fn smoothing_moves_fraction_of_distance() {
        let mut e = engine();
        let ticket = e.push_sample(TiltSample::new(90.0, 0.0));
        let state = e.on_frame(ticket).unwrap();
        assert!((state.rotate_x - 1.5).abs() < 1e-9);
        assert_eq!(state.rotate_y, 0.0);
    }

    #[test]
    fn converges_and_stops_requesting_frames() {
        let mut e = engine();
        e.push_sample(TiltSample::new(60.0, -30.0));
        run_until_settled(&mut e);
        assert!(e.is_settled());
        assert_eq!(e.state().rotate_x, 10.0);
        assert_eq!(e.state().rotate_y, -5.0);
        assert!(e.pending_frame().is_none());
    }

    #[test]
    fn samples_within_one_frame_coalesce() {
        let mut e = engine();
        let first = e.push_sample(TiltSample::new(90.0, 0.0));
        let second = e.push_sample(TiltSample::new(-90.0, 0.0));

        assert!(e.on_frame(first).is_none());
        let state = e.on_frame(second).unwrap();
        assert!((state.rotate_x + 1.5).abs() < 1e-9);
    }

    #[test]
    fn shadow_follows_rotation_and_clamps() {
        let mut e = TiltEngine::new(TiltConfig {
            offset_beta: 0.0,
            shadow_scale: 10.0,
            smoothing: 1.0,
            ..TiltConfig::default()
        })
        .unwrap();
        let t = e.push_sample(TiltSample::new(90.0, 90.0));
        let state = e.on_frame(t).unwrap();
        assert_eq!(state.shadow_x, -20.0);
        assert_eq!(state.shadow_y, 20.0);
    }

    #[test]
    fn reset_returns_to_rest() {
        let mut e = engine();
        e.push_sample(TiltSample::new(90.0, 90.0));
        run_until_settled(&mut e);
        e.reset();
        assert!(e.state().is_at_rest());
        assert!(e.pending_frame().is_none());
    }

    #[test]
    fn rejects_bad_smoothing() {
        let cfg = TiltConfig {
            smoothing: 1.5,
            ..TiltConfig::default()
        };
        assert!(TiltEngine::new(cfg).is_err());
        let cfg = TiltConfig {
            smoothing: f64::NAN,
            ..TiltConfig::default()
        };
        assert!(TiltEngine::new(cfg).is_err());
    }

    #[test]
    fn css_rendering() {
        let state = TiltState {
            rotate_x: 1.0,
            rotate_y: -2.5,
            shadow_x: 2.5,
            shadow_y: 9.0,
        };
        assert_eq!(
            state.transform_css(800),
            "perspective(800px) rotateX(1.00deg) rotateY(-2.50deg)"
        );
        assert_eq!(state.shadow_css("black"), "2.5px 9.0px 32px black");
    }

    struct Scripted {
        supported: bool,
        answer: MotionPermission,
        samples: VecDeque<TiltSample>,
        requests: usize,
    }

    impl MotionSource for Scripted {
        fn supported(&self) -> bool {
            self.supported
        }

        fn requires_gesture(&self) -> bool {
            true
        }

        async fn request_access(&mut self) -> MotionPermission {
            self.requests += 1;
            self.answer
        }

        async fn next_sample(&mut self) -> Option<TiltSample> {
            self.samples.pop_front()
        }
    }

    fn scripted(answer: MotionPermission) -> Scripted {
        Scripted {
            supported: true,
            answer,
            samples: VecDeque::from(vec![TiltSample::new(10.0, 20.0)]),
            requests: 0,
        }
    }

    #[tokio::test]
    async fn gate_withholds_samples_until_granted() {
        let mut gate = MotionGate::new(scripted(MotionPermission::Granted));
        assert!(gate.needs_gesture());
        assert_eq!(gate.next().await, None);

        assert_eq!(gate.request().await, MotionPermission::Granted);
        assert_eq!(gate.next().await, Some(TiltSample::new(10.0, 20.0)));
        assert_eq!(gate.next().await, None);
    }

    #[tokio::test]
    async fn denied_gate_stays_closed() {
        let mut gate = MotionGate::new(scripted(MotionPermission::Denied));
        assert_eq!(gate.request().await, MotionPermission::Denied);
        assert_eq!(gate.request().await, MotionPermission::Denied);
        assert_eq!(gate.source.requests, 1);
        assert_eq!(gate.next().await, None);
    }

    #[tokio::test]
    async fn unsupported_source_never_asks() {
        let mut source = scripted(MotionPermission::Granted);
        source.supported = false;
        let mut gate = MotionGate::new(source);
        assert_eq!(gate.permission(), MotionPermission::Unsupported);
        assert_eq!(gate.request().await, MotionPermission::Unsupported);
        assert_eq!(gate.source.requests, 0);
    }

    #[test]
    fn default_engine_matches_validated_default() {
        let validated = TiltEngine::new(TiltConfig::default()).unwrap();
        let engine = TiltEngine::default();
        assert_eq!(engine.config(), validated.config());
        assert_eq!(engine.state(), validated.state());
    }
}

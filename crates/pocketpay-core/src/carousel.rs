//! Auto-advancing onboarding carousel.
//!
//! The step timer and the progress bar share one elapsed counter, so any
//! step change (automatic or manual) restarts both in the same call and
//! there is no window where the old step timer can still fire.
//!
//! The UI ticker paces itself with [`CarouselController::until_next_tick`]
//! and credits time with [`CarouselController::advance_to`]. Both are
//! measured from the instant the current step began, so a swipe that lands
//! between two ticks still gets a full `step_duration` window.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::{WalletError, WalletResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Time a step stays on screen before advancing
    pub step_duration: Duration,
    /// Progress bar refresh cadence
    pub tick_interval: Duration,
    /// Horizontal distance (px) a swipe must cover
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            step_duration: Duration::from_millis(10_000),
            tick_interval: Duration::from_millis(100),
            swipe_threshold: 50.0,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> WalletResult<()> {
        if self.step_duration.is_zero() || self.tick_interval.is_zero() {
            return Err(WalletError::InvalidConfig(
                "carousel durations must be non-zero".to_string(),
            ));
        }
        if self.tick_interval > self.step_duration {
            return Err(WalletError::InvalidConfig(format!(
                "tick interval {:?} exceeds step duration {:?}",
                self.tick_interval, self.step_duration
            )));
        }
        if !(self.swipe_threshold > 0.0) {
            return Err(WalletError::InvalidConfig(format!(
                "swipe_threshold must be positive, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCause {
    Auto,
    Swipe,
    /// Button, dot or programmatic navigation
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub from: usize,
    pub to: usize,
    pub cause: StepCause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: go forward
    Left,
    /// Finger moved right: go back
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SwipeTrack {
    pointer_id: i32,
    start_x: f64,
    current_x: f64,
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    config: CarouselConfig,
    steps: usize,
    current: usize,
    elapsed: Duration,
    step_started: Instant,
    swipe: Option<SwipeTrack>,
}

impl CarouselController {
    pub fn new(steps: usize, config: CarouselConfig) -> WalletResult<Self> {
        config.validate()?;
        if steps == 0 {
            return Err(WalletError::InvalidConfig(
                "carousel needs at least one step".to_string(),
            ));
        }
        Ok(Self::build(steps, config))
    }

    /// Default timings; a zero step count is bumped to one.
    pub fn with_default_config(steps: usize) -> Self {
        Self::build(steps.max(1), CarouselConfig::default())
    }

    fn build(steps: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            steps,
            current: 0,
            elapsed: Duration::ZERO,
            step_started: Instant::now(),
            swipe: None,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Fraction of the current step's time that has passed, in [0, 1].
    pub fn progress(&self) -> f64 {
        let p = self.elapsed.as_secs_f64() / self.config.step_duration.as_secs_f64();
        p.clamp(0.0, 1.0)
    }

    /// Advance the clock. Fires at most one automatic step per call; any
    /// surplus time is discarded with the reset.
    pub fn tick(&mut self, dt: Duration) -> Option<StepChange> {
        self.elapsed += dt;
        if self.elapsed >= self.config.step_duration {
            let to = (self.current + 1) % self.steps;
            Some(self.change_to(to, StepCause::Auto))
        } else {
            None
        }
    }

    /// Credit the time that passed since the current step began, up to
    /// `now`. Time already counted is not counted twice.
    pub fn advance_to(&mut self, now: Instant) -> Option<StepChange> {
        let since = now.saturating_duration_since(self.step_started);
        self.tick(since.saturating_sub(self.elapsed))
    }

    /// Wait until the next tick boundary of the current step.
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        let tick = self.config.tick_interval.as_nanos();
        let since = now.saturating_duration_since(self.step_started).as_nanos();
        let next = (since / tick + 1) * tick;
        Duration::from_nanos((next - since) as u64)
    }

    /// True between `touch_start` and `touch_end`.
    pub fn is_tracking(&self) -> bool {
        self.swipe.is_some()
    }

    /// Start tracking `pointer_id`. Ignored while another pointer is tracked.
    pub fn touch_start(&mut self, pointer_id: i32, x: f64) {
        if self.swipe.is_some() {
            return;
        }
        self.swipe = Some(SwipeTrack {
            pointer_id,
            start_x: x,
            current_x: x,
        });
    }

    pub fn touch_move(&mut self, pointer_id: i32, x: f64) {
        if let Some(track) = self.swipe.as_mut().filter(|t| t.pointer_id == pointer_id) {
            track.current_x = x;
        }
    }

    fn owns_swipe(&self, pointer_id: i32) -> bool {
        self.swipe.is_some_and(|t| t.pointer_id == pointer_id)
    }

    /// Direction of the tracked gesture if it has passed the threshold.
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        let track = self.swipe?;
        let dx = track.start_x - track.current_x;
        if dx > self.config.swipe_threshold {
            Some(SwipeDirection::Left)
        } else if -dx > self.config.swipe_threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// Drop the gesture without moving, e.g. on `pointercancel`.
    pub fn touch_cancel(&mut self, pointer_id: i32) {
        if self.owns_swipe(pointer_id) {
            self.swipe = None;
        }
    }

    /// Finish the gesture; a long enough swipe moves one step (wrapping).
    /// Other pointers lifting do not end the tracked gesture.
    pub fn touch_end(&mut self, pointer_id: i32) -> Option<StepChange> {
        if !self.owns_swipe(pointer_id) {
            return None;
        }
        let direction = self.swipe_direction();
        self.swipe = None;
        let to = match direction? {
            SwipeDirection::Left => (self.current + 1) % self.steps,
            SwipeDirection::Right => (self.current + self.steps - 1) % self.steps,
        };
        Some(self.change_to(to, StepCause::Swipe))
    }

    /// Jump to a step. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> Option<StepChange> {
        if index >= self.steps {
            return None;
        }
        Some(self.change_to(index, StepCause::Manual))
    }

    /// Forward one step without wrapping.
    pub fn next(&mut self) -> Option<StepChange> {
        if self.is_last() {
            return None;
        }
        self.go_to(self.current + 1)
    }

    /// Back one step without wrapping.
    pub fn previous(&mut self) -> Option<StepChange> {
        let index = self.current.checked_sub(1)?;
        self.go_to(index)
    }

    fn change_to(&mut self, to: usize, cause: StepCause) -> StepChange {
        let change = StepChange {
            from: self.current,
            to,
            cause,
        };
        self.current = to;
        self.elapsed = Duration::ZERO;
        self.step_started = Instant::now();
        tracing::trace!(?change, "carousel step");
        change
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tokio::sync::mpsc;

    use super::*;

    const TICK: Duration = Duration::from_millis(100);
    const FINGER: i32 = 1;
    const OTHER: i32 = 2;

    fn carousel(steps: usize) -> CarouselController {
        CarouselController::new(steps, CarouselConfig::default()).unwrap()
    }

    fn run(c: &mut CarouselController, ticks: usize) -> Vec<StepChange> {
        (0..ticks).filter_map(|_| c.tick(TICK)).collect()
    }

    #[test]
    fn advances_after_full_duration() {
        let mut c = carousel(3);
        assert!(run(&mut c, 99).is_empty());
        assert!((c.progress() - 0.99).abs() < 1e-9);

        let changes = run(&mut c, 1);
        assert_eq!(
            changes,
            vec![StepChange {
                from: 0,
                to: 1,
                cause: StepCause::Auto
            }]
        );
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn auto_advance_wraps() {
        let mut c = carousel(2);
        run(&mut c, 200);
        assert_eq!(c.current(), 0);
        run(&mut c, 100);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn swipe_resets_progress_and_window() {
        let mut c = carousel(3);
        run(&mut c, 70);
        c.touch_start(FINGER, 300.0);
        c.touch_move(FINGER, 200.0);
        let change = c.touch_end(FINGER).unwrap();
        assert_eq!(change.cause, StepCause::Swipe);
        assert_eq!(c.current(), 1);
        assert_eq!(c.progress(), 0.0);

        // old window would have fired after 30 more ticks; new one needs 100
        assert!(run(&mut c, 99).is_empty());
        assert_eq!(run(&mut c, 1).len(), 1);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut c = carousel(3);
        run(&mut c, 10);
        c.touch_start(FINGER, 100.0);
        c.touch_move(FINGER, 60.0);
        assert_eq!(c.touch_end(FINGER), None);
        assert_eq!(c.current(), 0);
        assert_eq!(c.elapsed(), Duration::from_millis(1000));
    }

    #[test]
    fn swipe_right_goes_back_and_wraps() {
        let mut c = carousel(3);
        c.touch_start(FINGER, 0.0);
        c.touch_move(FINGER, 80.0);
        assert_eq!(c.swipe_direction(), Some(SwipeDirection::Right));
        c.touch_end(FINGER);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn touch_end_without_start() {
        let mut c = carousel(3);
        assert_eq!(c.touch_end(FINGER), None);
    }

    #[test]
    fn manual_navigation() {
        let mut c = carousel(3);
        assert_eq!(c.previous(), None);
        c.next();
        c.next();
        assert!(c.is_last());
        assert_eq!(c.next(), None);
        assert_eq!(c.go_to(7), None);
        assert_eq!(c.go_to(0).unwrap().cause, StepCause::Manual);
    }

    #[test]
    fn rejects_zero_steps() {
        assert!(CarouselController::new(0, CarouselConfig::default()).is_err());
        assert_eq!(CarouselController::with_default_config(0).steps(), 1);
    }

    #[test]
    fn tracking_flag() {
        let mut c = carousel(2);
        assert!(!c.is_tracking());
        c.touch_start(FINGER, 10.0);
        assert!(c.is_tracking());
        c.touch_end(FINGER);
        assert!(!c.is_tracking());
    }

    #[test]
    fn cancelled_swipe_does_not_step() {
        let mut c = carousel(3);
        c.touch_start(FINGER, 300.0);
        c.touch_move(FINGER, 100.0);
        c.touch_cancel(FINGER);
        assert_eq!(c.touch_end(FINGER), None);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn other_pointer_does_not_steer_swipe() {
        let mut c = carousel(3);
        c.touch_start(FINGER, 300.0);
        c.touch_start(OTHER, 0.0);
        c.touch_move(OTHER, 500.0);
        assert_eq!(c.swipe_direction(), None);
        assert_eq!(c.touch_end(OTHER), None);
        c.touch_cancel(OTHER);
        assert!(c.is_tracking());

        c.touch_move(FINGER, 200.0);
        assert_eq!(c.touch_end(FINGER).unwrap().to, 1);
    }

    #[test]
    fn ticks_align_to_step_start() {
        let c = carousel(3);
        let start = c.step_started;
        assert_eq!(c.until_next_tick(start), TICK);
        assert_eq!(
            c.until_next_tick(start + Duration::from_millis(130)),
            Duration::from_millis(70)
        );
    }

    /// Drives the controller the way the UI ticker does.
    async fn ticker(carousel: Arc<Mutex<CarouselController>>, tx: mpsc::UnboundedSender<Instant>) {
        loop {
            let wait = carousel.lock().until_next_tick(Instant::now());
            tokio::time::sleep(wait).await;
            if carousel.lock().advance_to(Instant::now()).is_some() {
                let _ = tx.send(Instant::now());
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn swipe_between_ticks_gets_full_window() {
        let shared = Arc::new(Mutex::new(carousel(3)));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(ticker(shared.clone(), tx));

        tokio::time::sleep(Duration::from_millis(190)).await;
        let swiped_at = Instant::now();
        {
            let mut c = shared.lock();
            c.touch_start(FINGER, 300.0);
            c.touch_move(FINGER, 200.0);
            assert!(c.touch_end(FINGER).is_some());
        }

        let advanced_at = rx.recv().await.unwrap();
        assert_eq!(advanced_at - swiped_at, Duration::from_millis(10_000));
        assert_eq!(shared.lock().current(), 2);
        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn undisturbed_ticker_advances_on_schedule() {
        let shared = Arc::new(Mutex::new(carousel(3)));
        let started = Instant::now();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(ticker(shared.clone(), tx));

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first - started, Duration::from_millis(10_000));
        assert_eq!(second - first, Duration::from_millis(10_000));
        task.abort();
    }
}

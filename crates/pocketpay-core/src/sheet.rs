//! Drag-to-resize bottom sheet controller.
//!
//! ```text
//! Closed -> Opening -> Open(idle) <-> Open(dragging) -> Open(idle) | Closed
//! ```
//!
//! A drag may only start inside the handle region. While dragging, an upward
//! delta grows the sheet from its committed height up to the expanded
//! ceiling; a downward delta shrinks it towards `min_height` but never closes
//! it mid-drag. On release a downward displacement strictly greater than
//! `dismiss_threshold` closes the sheet, anything else snaps back to the
//! collapsed height.
//!
//! Only the pointer that started a drag can move or release it; events from
//! any other pointer are ignored until the drag ends.

use crate::error::{WalletError, WalletResult};
use crate::frame::{FrameGate, FrameTicket};

/// Geometry and release threshold for the sheet, in px
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub collapsed_height: f64,
    pub expanded_height: f64,
    /// Floor a downward drag can shrink the sheet to
    pub min_height: f64,
    /// Downward release distance that dismisses the sheet
    pub dismiss_threshold: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            collapsed_height: 420.0,
            expanded_height: 720.0,
            min_height: 160.0,
            dismiss_threshold: 100.0,
        }
    }
}

impl SheetConfig {
    pub fn validate(&self) -> WalletResult<()> {
        if !(self.min_height >= 0.0
            && self.min_height <= self.collapsed_height
            && self.collapsed_height <= self.expanded_height)
        {
            return Err(WalletError::InvalidConfig(format!(
                "sheet heights must satisfy 0 <= min ({}) <= collapsed ({}) <= expanded ({})",
                self.min_height, self.collapsed_height, self.expanded_height
            )));
        }
        if !(self.dismiss_threshold > 0.0) {
            return Err(WalletError::InvalidConfig(format!(
                "dismiss_threshold must be positive, got {}",
                self.dismiss_threshold
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetPhase {
    #[default]
    Closed,
    /// Mounted and running its entry transition
    Opening,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Pointer that owns the drag
        pointer_id: i32,
        start_y: f64,
        /// Positive values are downward
        delta_y: f64,
    },
}

/// Height the sheet rests at when not being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetHeight {
    #[default]
    Collapsed,
    Expanded,
}

/// What happened when the pointer was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRelease {
    /// Sheet closed; the caller's dismiss callback must run
    Dismiss,
    /// Sheet returned to its collapsed height
    SnapBack,
    /// No drag was active
    Ignored,
}

/// State machine for a single bottom sheet.
///
/// Only one pointer can drag at a time: `pointer_down` is refused while a
/// drag is active, and moves or releases from other pointers are dropped.
#[derive(Debug, Clone)]
pub struct SheetController {
    config: SheetConfig,
    phase: SheetPhase,
    drag: DragPhase,
    committed: SheetHeight,
    frames: FrameGate,
}

impl SheetController {
    pub fn new(config: SheetConfig) -> WalletResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: SheetConfig) -> Self {
        Self {
            config,
            phase: SheetPhase::Closed,
            drag: DragPhase::Idle,
            committed: SheetHeight::Collapsed,
            frames: FrameGate::new(),
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    pub fn drag(&self) -> DragPhase {
        self.drag
    }

    pub fn committed(&self) -> SheetHeight {
        self.committed
    }

    pub fn is_open(&self) -> bool {
        self.phase != SheetPhase::Closed
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging { .. })
    }

    /// Pointer listeners are only wanted while the sheet is on screen.
    pub fn listeners_active(&self) -> bool {
        self.is_open()
    }

    /// Start opening. Resets any interaction left over from a previous open.
    pub fn open(&mut self) {
        if self.phase != SheetPhase::Closed {
            return;
        }
        self.drag = DragPhase::Idle;
        self.committed = SheetHeight::Collapsed;
        self.frames.cancel();
        self.phase = SheetPhase::Opening;
        tracing::debug!("sheet opening");
    }

    /// Entry transition finished.
    pub fn finish_opening(&mut self) {
        if self.phase == SheetPhase::Opening {
            self.phase = SheetPhase::Open;
        }
    }

    /// Close without a drag (backdrop tap, close button).
    pub fn close(&mut self) {
        self.phase = SheetPhase::Closed;
        self.drag = DragPhase::Idle;
        self.frames.cancel();
        tracing::debug!("sheet closed");
    }

    /// Pin the sheet at its expanded height (e.g. from a handle tap).
    pub fn expand(&mut self) {
        if self.phase == SheetPhase::Open && !self.is_dragging() {
            self.committed = SheetHeight::Expanded;
        }
    }

    /// Begin a drag. Returns `true` when the drag was accepted.
    pub fn pointer_down(&mut self, pointer_id: i32, y: f64, in_handle: bool) -> bool {
        if self.phase != SheetPhase::Open || !in_handle || self.is_dragging() {
            return false;
        }
        self.drag = DragPhase::Dragging {
            pointer_id,
            start_y: y,
            delta_y: 0.0,
        };
        true
    }

    /// Track the active pointer. Returns the frame that should repaint the
    /// height, or `None` when no drag is active or `pointer_id` does not own it.
    pub fn pointer_move(&mut self, pointer_id: i32, y: f64) -> Option<FrameTicket> {
        match &mut self.drag {
            DragPhase::Dragging {
                pointer_id: owner,
                start_y,
                delta_y,
            } if *owner == pointer_id => {
                *delta_y = y - *start_y;
                Some(self.frames.request())
            }
            _ => None,
        }
    }

    /// Height to paint for `ticket`, or `None` if the frame was superseded.
    pub fn render_frame(&mut self, ticket: FrameTicket) -> Option<f64> {
        if self.frames.fire(ticket) {
            Some(self.visual_height())
        } else {
            None
        }
    }

    /// End the drag and commit to dismiss or snap back. Releases from a
    /// pointer that does not own the drag are ignored.
    pub fn pointer_up(&mut self, pointer_id: i32) -> SheetRelease {
        let DragPhase::Dragging {
            pointer_id: owner,
            delta_y,
            ..
        } = self.drag
        else {
            return SheetRelease::Ignored;
        };
        if owner != pointer_id {
            return SheetRelease::Ignored;
        }
        self.drag = DragPhase::Idle;
        self.frames.cancel();

        if delta_y > self.config.dismiss_threshold {
            self.phase = SheetPhase::Closed;
            tracing::debug!(delta_y, "sheet dismissed by drag");
            SheetRelease::Dismiss
        } else {
            self.committed = SheetHeight::Collapsed;
            SheetRelease::SnapBack
        }
    }

    /// Height the sheet should currently be painted at.
    pub fn visual_height(&self) -> f64 {
        let cfg = &self.config;
        if self.phase == SheetPhase::Closed {
            return 0.0;
        }
        let base = self.resting_height();
        match self.drag {
            DragPhase::Idle => base,
            DragPhase::Dragging { delta_y, .. } if delta_y < 0.0 => {
                (base - delta_y).min(cfg.expanded_height)
            }
            DragPhase::Dragging { delta_y, .. } => (base - delta_y).max(cfg.min_height),
        }
    }

    fn resting_height(&self) -> f64 {
        match self.committed {
            SheetHeight::Collapsed => self.config.collapsed_height,
            SheetHeight::Expanded => self.config.expanded_height,
        }
    }
}

impl Default for SheetController {
    fn default() -> Self {
        Self::with_config(SheetConfig::default())
    }
}

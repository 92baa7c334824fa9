//! Device-orientation access through the webview.
//!
//! Implements [`MotionSource`] on top of `document::eval`. A small JS helper
//! (`window.__pocketpayMotion`) is installed once; it remembers the
//! permission promise so that a request started from a user gesture and a
//! later request from the sample task resolve to the same answer.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::document::{self, Eval};
use pocketpay_core::{MotionPermission, MotionSource, TiltSample};
use serde::Deserialize;

static NEXT_STREAM_ID: AtomicU64 = AtomicU64::new(1);

const INSTALL_JS: &str = r#"
if (!window.__pocketpayMotion) {
  const hasOrientation = typeof window.DeviceOrientationEvent !== 'undefined';
  const gesture = hasOrientation && typeof DeviceOrientationEvent.requestPermission === 'function';
  let pending = null;
  window.__pocketpayMotion = {
    supported: hasOrientation || typeof window.DeviceMotionEvent !== 'undefined',
    gesture,
    stops: {},
    request() {
      if (!this.supported) return Promise.resolve('unsupported');
      if (!this.gesture) return Promise.resolve('granted');
      if (!pending) {
        pending = DeviceOrientationEvent.requestPermission().catch(() => 'denied');
      }
      return pending;
    },
  };
}
return { supported: window.__pocketpayMotion.supported, gesture: window.__pocketpayMotion.gesture };
"#;

const REQUEST_JS: &str = "return await window.__pocketpayMotion.request();";

const PROMPT_JS: &str = "if (window.__pocketpayMotion) { window.__pocketpayMotion.request(); }";

// Orientation is preferred; rotation rate is only used until the first
// orientation event arrives, re-centred on the hold angle.
const STREAM_JS: &str = r#"
const hold = __HOLD__;
let sawOrientation = false;
const onOrientation = (e) => {
  if (e.beta == null || e.gamma == null) return;
  sawOrientation = true;
  dioxus.send({ beta: e.beta, gamma: e.gamma });
};
const onMotion = (e) => {
  if (sawOrientation) return;
  const r = e.rotationRate;
  if (!r || r.beta == null || r.gamma == null) return;
  dioxus.send({ beta: hold + r.beta, gamma: r.gamma });
};
window.addEventListener('deviceorientation', onOrientation);
window.addEventListener('devicemotion', onMotion);
window.__pocketpayMotion.stops[__ID__] = () => {
  window.removeEventListener('deviceorientation', onOrientation);
  window.removeEventListener('devicemotion', onMotion);
};
"#;

const STOP_JS: &str = r#"
const m = window.__pocketpayMotion;
if (m && m.stops[__ID__]) { m.stops[__ID__](); delete m.stops[__ID__]; }
"#;

#[derive(Debug, Deserialize)]
struct Probe {
    supported: bool,
    gesture: bool,
}

/// Motion sensor of the host webview
pub struct WebviewMotion {
    id: u64,
    supported: bool,
    gesture: bool,
    hold_angle: f64,
    stream: Option<Eval>,
}

impl WebviewMotion {
    /// Install the helper and detect what the platform supports.
    ///
    /// `hold_angle` re-centres rotation-rate fallback samples so that a
    /// still device reads as the neutral hold position.
    pub async fn probe(hold_angle: f64) -> Self {
        let (supported, gesture) = match document::eval(INSTALL_JS).join::<Probe>().await {
            Ok(probe) => (probe.supported, probe.gesture),
            Err(e) => {
                tracing::warn!("motion probe failed: {:?}", e);
                (false, false)
            }
        };
        tracing::debug!(supported, gesture, "motion probe");
        Self {
            id: NEXT_STREAM_ID.fetch_add(1, Ordering::Relaxed),
            supported,
            gesture,
            hold_angle,
            stream: None,
        }
    }

    /// Identifier of this source's listeners, for [`Self::stop`].
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Start the platform permission prompt. Call from a click handler so
    /// the request runs inside the user gesture.
    pub fn prompt_from_gesture() {
        let _ = document::eval(PROMPT_JS);
    }

    /// Remove the listeners registered for stream `id`.
    pub fn stop(id: u64) {
        let _ = document::eval(&STOP_JS.replace("__ID__", &id.to_string()));
    }
}

impl MotionSource for WebviewMotion {
    fn supported(&self) -> bool {
        self.supported
    }

    fn requires_gesture(&self) -> bool {
        self.gesture
    }

    async fn request_access(&mut self) -> MotionPermission {
        match document::eval(REQUEST_JS).join::<String>().await {
            Ok(answer) => parse_permission(&answer),
            Err(e) => {
                tracing::warn!("motion permission request failed: {:?}", e);
                MotionPermission::Denied
            }
        }
    }

    async fn next_sample(&mut self) -> Option<TiltSample> {
        let hold = self.hold_angle;
        let id = self.id;
        let stream = self.stream.get_or_insert_with(|| {
            document::eval(
                &STREAM_JS
                    .replace("__HOLD__", &format!("{:.3}", hold))
                    .replace("__ID__", &id.to_string()),
            )
        });
        match stream.recv::<TiltSample>().await {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::debug!("motion stream ended: {:?}", e);
                None
            }
        }
    }
}

fn parse_permission(answer: &str) -> MotionPermission {
    match answer {
        "granted" => MotionPermission::Granted,
        "unsupported" => MotionPermission::Unsupported,
        _ => MotionPermission::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_answers() {
        assert_eq!(parse_permission("granted"), MotionPermission::Granted);
        assert_eq!(parse_permission("denied"), MotionPermission::Denied);
        assert_eq!(parse_permission("unsupported"), MotionPermission::Unsupported);
        assert_eq!(parse_permission("prompt"), MotionPermission::Denied);
    }

    #[test]
    fn stream_script_placeholders_filled() {
        let js = STREAM_JS
            .replace("__HOLD__", "45.000")
            .replace("__ID__", "7");
        assert!(js.contains("const hold = 45.000;"));
        assert!(js.contains("stops[7]"));
        assert!(!js.contains("__HOLD__") && !js.contains("__ID__"));
    }
}

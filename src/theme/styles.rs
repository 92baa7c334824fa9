//! Global CSS styles for PocketPay.
//!
//! Colors and timings come from the `:root` variables rendered by
//! `theme::root_variables`.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--surface-sunken);
  color: var(--ink);
  font-family: -apple-system, 'SF Pro Text', 'Inter', 'Segoe UI', sans-serif;
  -webkit-font-smoothing: antialiased;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

/* === Typography === */
.page-title {
  font-size: 1.75rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-3);
}

.section-header {
  font-size: 0.875rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--ink-muted);
  margin: var(--space-6) 0 var(--space-2);
}

.body-text {
  font-size: 1rem;
  line-height: 1.5;
}

.muted {
  color: var(--ink-muted);
}

/* === Layout === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.tab-content {
  flex: 1;
  padding: var(--space-6) var(--space-4) calc(72px + var(--space-4));
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  min-height: 48px;
  padding: 0 var(--space-6);
  border-radius: var(--radius-md);
  font-weight: 600;
  transition: background var(--duration-fast) var(--ease-out),
    transform var(--duration-fast) var(--ease-out);
}

.btn:active:not(:disabled) { transform: scale(0.98); }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-block { width: 100%; }

.btn-primary { background: var(--brand); color: var(--surface); }
.btn-secondary { background: var(--surface); color: var(--brand); border: 1px solid var(--brand); }
.btn-ghost { color: var(--ink-muted); }
.btn-danger { background: var(--danger); color: var(--surface); }

.btn-spinner {
  width: 16px;
  height: 16px;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 700ms linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

/* === Form fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  margin-bottom: var(--space-4);
}

.input-label {
  font-size: 0.875rem;
  font-weight: 500;
}

.input-field {
  min-height: 48px;
  padding: 0 var(--space-3);
  border: 1px solid var(--surface-sunken);
  border-radius: var(--radius-sm);
  background: var(--surface);
  font-size: 1rem;
}

.input-field:focus {
  outline: 2px solid var(--brand);
  outline-offset: 1px;
}

.has-error .input-field { border-color: var(--danger); }

.field-error, .form-error {
  color: var(--danger);
  font-size: 0.875rem;
}

.form-error { margin-bottom: var(--space-3); }

.checkbox {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

/* === Onboarding === */
.onboarding {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  padding: var(--space-6) var(--space-4);
}

.swipe-area { flex: 1; user-select: none; }

.onboarding-slide {
  display: flex;
  flex-direction: column;
  justify-content: center;
  height: 100%;
  text-align: center;
  gap: var(--space-3);
}

.onboarding-art {
  width: 160px;
  height: 160px;
  margin: 0 auto var(--space-6);
  border-radius: var(--radius-lg);
  background: var(--brand-soft);
}

.onboarding-actions {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.step-progress {
  display: flex;
  gap: var(--space-1);
}

.step-track {
  flex: 1;
  height: 4px;
  border-radius: var(--radius-pill);
  background: var(--brand-soft);
  overflow: hidden;
}

.step-fill { height: 100%; }

/* === PIN === */
.pin-screen {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-6);
  min-height: 100vh;
  padding: 64px var(--space-4) var(--space-6);
  outline: none;
}

.pin-dots { display: flex; gap: var(--space-4); }

.pin-dot {
  width: 14px;
  height: 14px;
  border-radius: 50%;
  border: 2px solid var(--ink-muted);
  transition: background var(--duration-fast) var(--ease-out);
}

.pin-dot.filled { background: var(--ink); border-color: var(--ink); }
.pin-dots.error { animation: shake 320ms var(--ease-out); }
.pin-dots.error .pin-dot { border-color: var(--danger); }

@keyframes shake {
  25% { transform: translateX(-8px); }
  75% { transform: translateX(8px); }
}

.keypad {
  display: grid;
  grid-template-columns: repeat(3, 72px);
  gap: var(--space-4);
  margin-top: auto;
}

.keypad-key {
  width: 72px;
  height: 72px;
  border-radius: 50%;
  background: var(--surface);
  font-size: 1.5rem;
  font-weight: 500;
}

.keypad-key:active:not(:disabled) { background: var(--brand-soft); }
.keypad-aux { background: transparent; }

/* === Login === */
.login {
  padding: 64px var(--space-4) var(--space-6);
}

.login-header { margin-bottom: var(--space-6); }
.login-alt { margin-top: var(--space-4); }

/* === Tilt card === */
.tilt-card-wrap {
  position: relative;
  perspective: 800px;
  margin-bottom: var(--space-6);
}

.tilt-card {
  border-radius: var(--radius-lg);
  transform-style: preserve-3d;
}

.balance-card {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  min-height: 190px;
  padding: var(--space-6);
  color: var(--surface);
  background: linear-gradient(135deg, var(--brand), #7c3aed);
}

.balance-label { opacity: 0.8; font-size: 0.875rem; }
.balance-amount { font-size: 2.25rem; font-weight: 700; }
.balance-card-number { margin-top: auto; letter-spacing: 0.12em; opacity: 0.8; }

.tilt-permission-chip {
  position: absolute;
  right: var(--space-3);
  top: var(--space-3);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-pill);
  background: var(--surface);
  color: var(--brand);
  font-size: 0.75rem;
  font-weight: 600;
}

.quick-actions {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-3);
}

/* === Transactions === */
.tx-list { list-style: none; }

.tx-row {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-3) 0;
  border-bottom: 1px solid var(--surface-sunken);
}

.tx-avatar {
  display: grid;
  place-items: center;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  background: var(--brand-soft);
  color: var(--brand);
  font-weight: 600;
}

.tx-text { flex: 1; display: flex; flex-direction: column; }
.tx-note { font-size: 0.8125rem; color: var(--ink-muted); }
.tx-amount { font-weight: 600; font-variant-numeric: tabular-nums; }
.tx-amount.credit { color: var(--success); }

/* === Segmented control === */
.segmented {
  position: relative;
  display: flex;
  padding: var(--space-1);
  margin-bottom: var(--space-4);
  border-radius: var(--radius-md);
  background: var(--surface-sunken);
}

.segmented-indicator {
  position: absolute;
  left: 0;
  top: 0;
  border-radius: var(--radius-sm);
  background: var(--surface);
  box-shadow: 0 1px 3px var(--shadow);
  pointer-events: none;
}

.segment {
  position: relative;
  flex: 1;
  min-height: 36px;
  border-radius: var(--radius-sm);
  color: var(--ink-muted);
  font-weight: 500;
}

.segment.active { color: var(--ink); }
.segment:focus-visible { outline: 2px solid var(--brand); }

/* === Send === */
.contact-list {
  list-style: none;
  display: flex;
  gap: var(--space-2);
  overflow-x: auto;
  margin-bottom: var(--space-4);
}

.contact {
  flex-shrink: 0;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-pill);
  background: var(--surface);
  cursor: pointer;
}

.contact.selected { background: var(--brand); color: var(--surface); }

.sheet-summary {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

/* === Bottom sheet === */
.sheet-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: flex-end;
}

.bottom-sheet {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding: 0 var(--space-4) var(--space-6);
  overflow: hidden;
}

.bottom-sheet.dragging { user-select: none; }

.sheet-handle {
  display: flex;
  justify-content: center;
  padding: var(--space-3) 0;
  cursor: grab;
}

.bottom-sheet.dragging .sheet-handle { cursor: grabbing; }

.sheet-grabber {
  width: 40px;
  height: 4px;
  border-radius: var(--radius-pill);
  background: var(--ink-muted);
  opacity: 0.4;
}

.sheet-title { font-size: 1.25rem; font-weight: 700; }

.sheet-body {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  overflow-y: auto;
}

@keyframes sheet-enter {
  from { transform: translateY(100%); }
  to { transform: translateY(0); }
}

/* === Profile === */
.profile-card {
  padding: var(--space-4);
  margin-bottom: var(--space-4);
  border-radius: var(--radius-md);
  background: var(--surface);
}

.profile-card .section-header { margin-top: 0; }
.profile-card .btn { margin-top: var(--space-3); }

.profile-status {
  margin-bottom: var(--space-4);
  color: var(--ink-muted);
}

/* === Toast === */
.toast {
  position: fixed;
  left: var(--space-4);
  right: var(--space-4);
  top: var(--space-4);
  z-index: 100;
  display: flex;
  gap: var(--space-3);
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  background: var(--ink);
  color: var(--surface);
  box-shadow: 0 8px 24px var(--shadow);
  animation: toast-in var(--duration-sheet) var(--ease-out);
  cursor: pointer;
}

.toast-icon { width: 32px; height: 32px; border-radius: var(--radius-sm); }
.toast-text { display: flex; flex-direction: column; }
.toast-body { font-size: 0.875rem; opacity: 0.8; }

@keyframes toast-in {
  from { transform: translateY(-120%); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

/* === Mobile Navigation === */
.mobile-nav {
  position: fixed;
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 40;
  display: flex;
  justify-content: space-around;
  height: 72px;
  padding-bottom: env(safe-area-inset-bottom);
  background: var(--surface);
  border-top: 1px solid var(--surface-sunken);
}

.mobile-nav-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2px;
  flex: 1;
  color: var(--ink-muted);
  text-decoration: none;
  transition: color var(--duration-fast) var(--ease-out);
}

.mobile-nav-item.active { color: var(--brand); }
.mobile-nav-label { font-size: 0.6875rem; font-weight: 500; }

@media (prefers-reduced-motion: reduce) {
  .tilt-card, .segmented-indicator, .bottom-sheet, .toast, .pin-dots.error {
    transition: none !important;
    animation: none !important;
  }
}
"#;

pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

.icon {
  width: 20px;
  height: 20px;
  flex-shrink: 0;
}

.icon-lg {
  width: 24px;
  height: 24px;
  flex-shrink: 0;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  font-size: 0.875rem;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
  background: none;
  color: inherit;
}

.btn:focus-visible {
  box-shadow: 0 0 0 2px var(--ring);
}

.btn-ghost:hover {
  background-color: var(--accent);
  color: var(--text-primary);
}

.btn-icon {
  width: 40px;
  height: 40px;
  padding: 0;
  position: relative;
}

.btn-secondary {
  background-color: var(--secondary);
  color: var(--secondary-foreground);
}

.btn-outline {
  border: 1px solid var(--border);
  background-color: var(--background);
  color: var(--text-primary);
}

.btn-outline:hover {
  background-color: var(--accent);
}

.btn-lg {
  padding: var(--space-3) var(--space-8);
  font-size: 1rem;
}

/* Cards */
.card {
  background-color: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
}

.card-header {
  padding: var(--space-6) var(--space-6) 0 var(--space-6);
}

.card-title {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 1.5rem;
  font-weight: 600;
}

.card-content {
  padding: var(--space-6);
}

.card-description {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Sheet */
.sheet-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  background-color: var(--overlay);
  animation: fade-in var(--transition-slow) var(--easing-standard);
}

.sheet-panel {
  position: fixed;
  top: 0;
  bottom: 0;
  left: 0;
  border-right: 1px solid var(--border);
  animation: slide-in-left var(--transition-slow) var(--easing-standard);
  width: var(--sheet-width);
  padding: var(--space-6);
  background-color: var(--background);
  color: var(--text-primary);
  box-shadow: var(--shadow-lg);
  outline: none;
}

@media (min-width: 640px) {
  .sheet-panel {
    width: var(--sheet-width-sm);
  }
}

.sheet-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  opacity: 0.7;
}

.sheet-close:hover {
  opacity: 1;
}

.sheet-header {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.sheet-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.sheet-description {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

@keyframes fade-in {
  from { opacity: 0; }
}

@keyframes slide-in-left {
  from { transform: translateX(-100%); }
}

/* Motion */
.motion {
  animation-name: motion-enter;
  animation-fill-mode: both;
  animation-timing-function: var(--easing-standard);
}

@keyframes motion-enter {
  from {
    opacity: var(--motion-opacity, 0);
    transform: translate(var(--motion-x, 0), var(--motion-y, 0));
  }
}

.motion-press {
  transition: scale var(--transition-fast) var(--easing-standard);
}

.motion-press:hover {
  scale: var(--motion-hover, 1);
}

.motion-press:active {
  scale: var(--motion-tap, 1);
}

@media (prefers-reduced-motion: reduce) {
  .motion,
  .sheet-overlay,
  .sheet-panel {
    animation: none;
  }
}
"#;

pub const SHELL_STYLES: &str = r#"
/* Landing shell */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
}

/* Navigation bar */
.app-nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4);
  background-color: var(--primary);
  color: var(--primary-foreground);
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.nav-compact {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

/* Theme toggle swaps the two glyphs with the theme */
.theme-toggle .icon {
  transition: transform var(--transition-slow) var(--easing-standard);
}

.theme-toggle .glyph-moon {
  position: absolute;
  transform: rotate(90deg) scale(0);
}

[data-theme="dark"] .theme-toggle .glyph-sun {
  transform: rotate(-90deg) scale(0);
}

[data-theme="dark"] .theme-toggle .glyph-moon {
  transform: rotate(0deg) scale(1);
}

/* Side menu */
.side-menu {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  margin-top: var(--space-4);
}

.side-menu-link {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  color: inherit;
}

.side-menu-link:hover {
  background-color: var(--accent);
  text-decoration: none;
}

/* Hero */
.hero {
  position: relative;
  width: 100%;
  height: 60vh;
  margin-bottom: var(--space-12);
  overflow: hidden;
}

.hero-image {
  filter: brightness(0.5);
}

.hero-content {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: var(--space-6);
  color: var(--text-inverse);
  text-align: center;
}

.hero-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.hero-tagline {
  font-size: 1.25rem;
  max-width: 42rem;
  margin-bottom: var(--space-8);
}

@media (min-width: 768px) {
  .hero-title {
    font-size: 3.75rem;
  }

  .hero-tagline {
    font-size: 1.5rem;
  }
}

/* Services */
.services {
  padding: var(--space-6);
}

.services-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-6);
  max-width: var(--container-width);
  margin: 0 auto;
}

@media (min-width: 768px) {
  .services-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (min-width: 1024px) {
  .services-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.service-image {
  width: 100%;
  height: 10rem;
  border-radius: var(--radius-md);
  margin-bottom: var(--space-4);
}

.service-cta {
  margin-top: var(--space-4);
}

/* Footer */
.app-footer {
  margin-top: var(--space-12);
  padding: var(--space-8) 0;
  background-color: var(--muted);
}

.footer-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-8);
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

@media (min-width: 768px) {
  .footer-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.footer-heading {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.footer-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.footer-links a {
  color: inherit;
}
"#;

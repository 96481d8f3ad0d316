//! Global CSS styles for Folio.
//!
//! Dark palette by default; `body.light-theme` swaps the custom properties.
//! Class names are shared with `folio-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0a0a0f;
  --bg-elevated: #12121a;
  --card-bg: rgba(255, 255, 255, 0.05);
  --border: rgba(255, 255, 255, 0.1);

  --accent: #00d4ff;
  --accent-glow: rgba(0, 212, 255, 0.3);
  --teal: #4ecdc4;
  --success: #2ecc71;
  --error: #e74c3c;

  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  --font-body: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --nav-height: 70px;
  --radius: 12px;
  --transition: 0.3s ease;
}

body.light-theme {
  --bg: #f7f9fc;
  --bg-elevated: #ffffff;
  --card-bg: rgba(0, 0, 0, 0.03);
  --border: rgba(0, 0, 0, 0.1);

  --accent: #0077b6;
  --accent-glow: rgba(0, 119, 182, 0.25);

  --text-primary: #1a1a2e;
  --text-secondary: rgba(26, 26, 46, 0.75);
  --text-muted: rgba(26, 26, 46, 0.5);
}

/* === Base === */
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.6;
  overflow-x: hidden;
  transition: background var(--transition), color var(--transition);
}

a { color: var(--accent); text-decoration: none; }

.container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }

.section-title {
  font-size: 2.25rem;
  margin-bottom: 2rem;
  text-align: center;
}

/* === Loader === */
.loader {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--bg);
  z-index: 2000;
  transition: opacity 0.5s ease, visibility 0.5s ease;
}

.loader.hidden { opacity: 0; visibility: hidden; }

.loader-spinner {
  width: 48px;
  height: 48px;
  border: 3px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  z-index: 1000;
  background: transparent;
  transition: background var(--transition), box-shadow var(--transition);
}

.navbar.scrolled {
  background: var(--bg-elevated);
  box-shadow: 0 2px 20px rgba(0, 0, 0, 0.3);
  backdrop-filter: blur(10px);
}

.nav-container {
  max-width: 1100px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand { font-weight: 700; font-size: 1.25rem; color: var(--text-primary); }

.nav-links { display: flex; gap: 1.75rem; }

.nav-link {
  color: var(--text-secondary);
  position: relative;
  transition: color var(--transition);
}

.nav-link:hover, .nav-link.active { color: var(--accent); }

.nav-link.active::after {
  content: '';
  position: absolute;
  left: 0;
  right: 0;
  bottom: -6px;
  height: 2px;
  background: var(--accent);
}

.nav-actions { display: flex; gap: 0.5rem; }

.icon-btn {
  background: none;
  border: 1px solid var(--border);
  border-radius: 50%;
  width: 40px;
  height: 40px;
  color: var(--text-primary);
  cursor: pointer;
  transition: border-color var(--transition), color var(--transition);
}

.icon-btn:hover { border-color: var(--accent); color: var(--accent); }

.mobile-menu-toggle { display: none; }

/* === Mobile Menu === */
.mobile-menu {
  position: fixed;
  top: var(--nav-height);
  left: 0;
  right: 0;
  display: none;
  flex-direction: column;
  background: var(--bg-elevated);
  border-bottom: 1px solid var(--border);
  z-index: 999;
}

.mobile-menu.active { display: flex; }

.mobile-menu-item {
  padding: 1rem 1.5rem;
  color: var(--text-secondary);
  border-top: 1px solid var(--border);
  position: relative;
  z-index: 1;
}

.mobile-menu-item.active { color: var(--accent); }

.mobile-menu-backdrop {
  position: fixed;
  inset: var(--nav-height) 0 0 0;
  z-index: 0;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .mobile-menu-toggle { display: inline-block; }
}

/* === Pages === */
.pages { padding-top: var(--nav-height); }

.page {
  display: none;
  min-height: calc(100vh - var(--nav-height));
  padding: 4rem 0;
}

.page.active { display: block; animation: pageIn 0.4s ease; }

@keyframes pageIn {
  from { opacity: 0; }
  to { opacity: 1; }
}

.fade-in {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.fade-in.visible { opacity: 1; transform: translateY(0); }

/* === Hero === */
.hero {
  position: relative;
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  text-align: center;
  overflow: hidden;
}

.hero-title { font-size: 3.25rem; line-height: 1.2; }
.highlight { color: var(--accent); }
.hero-subtitle { font-size: 1.4rem; color: var(--text-secondary); margin-top: 1rem; }
.hero-tagline { color: var(--text-muted); margin-top: 0.5rem; }

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  margin-top: 2rem;
  flex-wrap: wrap;
}

/* === Particles === */
.particles { position: absolute; inset: 0; pointer-events: none; z-index: -1; }

.particle {
  position: absolute;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  background: var(--accent);
  animation-name: floatParticle;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
}

@keyframes floatParticle {
  0%, 100% { transform: translate(0, 0); }
  25% { transform: translate(20px, -30px); }
  50% { transform: translate(-15px, -60px); }
  75% { transform: translate(10px, -30px); }
}

/* === Buttons === */
.btn {
  position: relative;
  overflow: hidden;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.8rem 1.6rem;
  border-radius: 50px;
  border: 2px solid var(--accent);
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition), box-shadow var(--transition), background var(--transition);
}

.btn:hover { transform: translateY(-2px); box-shadow: 0 8px 24px var(--accent-glow); }
.btn:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }

.btn-primary { background: var(--accent); color: var(--bg); }
.btn-secondary { background: transparent; color: var(--accent); }
.btn-download { background: var(--card-bg); color: var(--text-primary); border-color: var(--border); }
.btn-download:hover { border-color: var(--accent); }

.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.4);
  transform: scale(0);
  animation: ripple 0.6s linear;
  pointer-events: none;
}

@keyframes ripple { to { transform: scale(4); opacity: 0; } }

/* === About === */
.about-text p { color: var(--text-secondary); margin-bottom: 1rem; }

.skill-list { display: flex; flex-wrap: wrap; gap: 0.6rem; margin-top: 1rem; }

.skill-badge {
  padding: 0.35rem 0.9rem;
  border-radius: 50px;
  border: 1px solid var(--teal);
  color: var(--teal);
  font-size: 0.9rem;
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--card-bg);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  backdrop-filter: blur(10px);
  height: 100%;
  transition: transform var(--transition), border-color var(--transition);
}

.project-card:hover { transform: translateY(-6px); border-color: var(--accent); }
.project-title { margin-bottom: 0.5rem; }
.project-description { color: var(--text-secondary); }

.project-tags { list-style: none; display: flex; flex-wrap: wrap; gap: 0.4rem; margin: 1rem 0; }

.project-tag {
  font-size: 0.8rem;
  padding: 0.2rem 0.6rem;
  border-radius: 6px;
  background: rgba(78, 205, 196, 0.12);
  color: var(--teal);
}

.empty-state { text-align: center; color: var(--text-muted); }

/* === CV === */
.download-panel {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.business-card-downloads { text-align: center; }
.business-card-downloads h4 { margin-bottom: 0.75rem; color: var(--text-secondary); }
.download-buttons { display: flex; gap: 0.75rem; flex-wrap: wrap; justify-content: center; }

.timeline { margin-bottom: 2.5rem; }
.timeline h3 { margin-bottom: 1rem; }

.timeline-item {
  display: flex;
  gap: 1rem;
  padding: 1rem 0;
  border-left: 2px solid var(--border);
  padding-left: 1.25rem;
  position: relative;
}

.timeline-marker {
  position: absolute;
  left: -14px;
  width: 26px;
  height: 26px;
  border-radius: 50%;
  background: var(--bg-elevated);
  border: 2px solid var(--accent);
  color: var(--accent);
  font-size: 0.7rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.timeline-body { padding-left: 1rem; }
.timeline-period { font-size: 0.85rem; color: var(--accent); }
.timeline-place { color: var(--text-muted); }
.timeline-summary { color: var(--text-secondary); margin-top: 0.4rem; }

/* === Contact === */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 2rem;
}

@media (max-width: 768px) {
  .contact-layout { grid-template-columns: 1fr; }
  .hero-title { font-size: 2.4rem; }
}

.contact-details { list-style: none; }
.contact-details li { display: flex; gap: 0.75rem; align-items: center; margin-bottom: 1rem; }
.contact-details i { color: var(--accent); width: 20px; }

.contact-form { display: flex; flex-direction: column; gap: 1rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.form-group { display: flex; flex-direction: column; gap: 0.35rem; }
.form-group label { font-size: 0.9rem; color: var(--text-secondary); }

.form-group input, .form-group textarea {
  background: var(--card-bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 0.75rem;
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition);
}

.form-group input:focus, .form-group textarea:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

/* === Notifications === */
.toast-stack {
  position: fixed;
  top: calc(var(--nav-height) + 1rem);
  right: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 1500;
}

.notification {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  min-width: 260px;
  padding: 0.9rem 1.2rem;
  border-radius: 8px;
  background: var(--bg-elevated);
  border-left: 4px solid var(--accent);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
  transform: translateX(120%);
  transition: transform 0.3s ease;
}

.notification.shown { transform: translateX(0); }
.notification.leaving { transform: translateX(120%); }
.notification.success { border-left-color: var(--success); }
.notification.error { border-left-color: var(--error); }
.notification.success i { color: var(--success); }
.notification.error i { color: var(--error); }
.notification.info i { color: var(--accent); }
"#;

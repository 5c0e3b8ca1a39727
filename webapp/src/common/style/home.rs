pub const HOME_STYLES: &str = r#"
/* Landing page */

.home-container {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

section {
  padding: var(--space-16) 0;
  scroll-margin-top: var(--header-height);
}

/* sections fade up as they mount */
.reveal {
  animation: reveal-up var(--transition-slow) var(--easing-standard) both;
}

@keyframes reveal-up {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: none; }
}

/* Hero */
.hero {
  padding: calc(var(--space-16) * 2) 0 var(--space-16);
  text-align: center;
  background: radial-gradient(circle at top, rgba(99, 102, 241, 0.18), transparent 60%);
}

.hero-eyebrow {
  color: var(--accent);
  font-weight: 600;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  font-size: 0.875rem;
}

.hero-title {
  font-size: 3.25rem;
  font-weight: 700;
  line-height: 1.1;
  margin: var(--space-4) 0;
}

.hero-title .highlight {
  background: linear-gradient(90deg, var(--primary), var(--accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  max-width: 640px;
  margin: 0 auto var(--space-8);
  color: var(--text-secondary);
  font-size: 1.125rem;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  flex-wrap: wrap;
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: var(--space-8);
}

.about-text p {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.about-facts {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.about-facts li {
  padding: var(--space-3) var(--space-4);
  border-left: 3px solid var(--accent);
  background-color: var(--surface);
  border-radius: var(--radius-md);
}

/* Tech stack */
.tech-card {
  padding: var(--space-4);
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

.tech-name {
  font-weight: 600;
}

.tech-meta {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

/* Projects and posts */
.project-card,
.post-card {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  padding: var(--space-5);
  color: var(--text-primary);
}

.project-card:hover,
.post-card:hover {
  text-decoration: none;
}

.project-card h3,
.post-card h3 {
  font-size: 1.125rem;
}

.project-card p,
.post-card p {
  color: var(--text-secondary);
  flex: 1;
}

.post-meta {
  font-size: 0.8rem;
  color: var(--text-tertiary);
}

/* Timeline */
.timeline {
  list-style: none;
  border-left: 2px solid var(--border);
  margin-left: var(--space-2);
}

.timeline-item {
  position: relative;
  padding: 0 0 var(--space-8) var(--space-6);
}

.timeline-item::before {
  content: "";
  position: absolute;
  left: -7px;
  top: 6px;
  width: 12px;
  height: 12px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
}

.timeline-period {
  font-size: 0.875rem;
  color: var(--accent);
  font-weight: 600;
}

.timeline-place {
  color: var(--text-tertiary);
}

/* Project detail */
.project-detail {
  padding: var(--space-12) 0;
}

.project-header h1 {
  font-size: 2.25rem;
  margin-bottom: var(--space-2);
}

.project-facts {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
  gap: var(--space-4);
  margin: var(--space-6) 0;
}

.project-facts dt {
  font-size: 0.75rem;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

.project-links {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-6);
}

/* Studio */
.studio {
  max-width: 640px;
  margin: 0 auto;
  padding: var(--space-12) var(--space-4);
}

.studio-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-6);
}

.studio-panel {
  padding: var(--space-6);
}

.form-actions {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

/* Footer */
.home-footer {
  margin-top: auto;
  padding: var(--space-8) 0;
  border-top: 1px solid var(--border);
  color: var(--text-tertiary);
  text-align: center;
  font-size: 0.875rem;
}

.footer-links {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  margin-bottom: var(--space-2);
}

@media (max-width: 768px) {
  .hero-title {
    font-size: 2.25rem;
  }

  .about-grid {
    grid-template-columns: 1fr;
  }
}
"#;

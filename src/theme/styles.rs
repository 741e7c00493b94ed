//! Global CSS styles for the Valentine card.
//!
//! Layout and colour only. Every animation comes from
//! `valentine_core::animation::presets::stylesheet()` or inline
//! declarations built from the same presets.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ROSE (Accept, Titles) */
  --rose: #ff4d6d;
  --rose-deep: #c9184a;
  --rose-glow: rgba(255, 77, 109, 0.35);

  /* BLUSH (Backgrounds, Decline) */
  --blush: #ffd6e0;
  --blush-light: #fff0f3;

  /* WINE (Text) */
  --wine: #7a1c3a;
  --wine-muted: rgba(122, 28, 58, 0.7);

  /* Typography */
  --font-display: 'Pacifico', 'Brush Script MT', cursive;
  --font-body: 'Quicksand', 'Segoe UI', system-ui, sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  color: var(--wine);
  background: var(--blush-light);
}

/* === Container === */
.valentine-container {
  position: relative;
  width: 100vw;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: linear-gradient(135deg, var(--blush-light) 0%, var(--blush) 50%, #ffb3c6 100%);
}

/* === Backdrop === */
.hearts-background {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.heart-float,
.rose-float {
  position: absolute;
  font-size: 1.75rem;
  opacity: 0.6;
  user-select: none;
}

.rose-float {
  font-size: 2rem;
}

/* === Follower === */
.following-heart {
  position: fixed;
  top: 0;
  left: 0;
  font-size: 2rem;
  pointer-events: none;
  z-index: 50;
  will-change: transform;
}

/* === Question === */
.question-container {
  position: relative;
  z-index: 1;
  text-align: center;
  padding: 3rem 2.5rem;
  max-width: 560px;
  background: rgba(255, 255, 255, 0.72);
  border-radius: 28px;
  box-shadow: 0 20px 60px var(--rose-glow);
}

.emoji-container {
  margin-bottom: 1rem;
}

.emoji {
  display: inline-block;
  font-size: 4rem;
}

.question {
  font-family: var(--font-display);
  font-size: 2.5rem;
  line-height: 1.3;
  color: var(--rose-deep);
  margin-bottom: 1rem;
}

.title-char {
  display: inline-block;
}

.subtitle {
  font-size: 1.1rem;
  color: var(--wine-muted);
  margin-bottom: 2rem;
}

.buttons-container {
  display: flex;
  gap: 1.5rem;
  justify-content: center;
  align-items: center;
  min-height: 120px;
}

/* === Buttons === */
.btn {
  font-family: var(--font-body);
  font-size: 1.15rem;
  font-weight: 700;
  padding: 0.85rem 2.2rem;
  border: none;
  border-radius: 999px;
  cursor: pointer;
}

.btn-accept {
  background: var(--rose);
  color: white;
  box-shadow: 0 8px 24px var(--rose-glow);
}

.btn-decline {
  background: white;
  color: var(--wine);
  border: 2px solid var(--blush);
}

.btn-reset {
  margin-top: 1.5rem;
  background: transparent;
  color: var(--rose-deep);
  border: 2px solid var(--rose);
}

/* === Celebration === */
.celebration-container {
  position: relative;
  z-index: 1;
  display: flex;
  align-items: center;
  justify-content: center;
}

.confetti-layer {
  position: absolute;
  top: 50%;
  left: 50%;
  pointer-events: none;
  z-index: 2;
}

.confetti {
  position: absolute;
  font-size: 1.6rem;
  user-select: none;
}

.success-message {
  text-align: center;
  padding: 2.5rem;
  max-width: 520px;
  background: rgba(255, 255, 255, 0.78);
  border-radius: 28px;
  box-shadow: 0 20px 60px var(--rose-glow);
}

.success-message h1 {
  font-family: var(--font-display);
  font-size: 2rem;
  color: var(--rose-deep);
  margin: 1rem 0 0.5rem;
}

.success-message p {
  font-size: 1.1rem;
  color: var(--wine-muted);
}

.celebration-gif {
  width: 220px;
  max-width: 80%;
  border-radius: 18px;
}
"#;

//! Enter and press transitions.
//!
//! A [`Motion`] describes where an element starts (offset and opacity), how
//! long it takes to settle and how it reacts to hover and press. The
//! stylesheet does the animating; this module only turns the descriptor into
//! CSS custom properties consumed by the `.motion` keyframes.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Starting offset in pixels, relative to the resting position.
    pub x: f32,
    pub y: f32,
    pub fade: bool,
    /// Seconds.
    pub duration: f32,
    /// Seconds.
    pub delay: f32,
    pub hover_scale: Option<f32>,
    pub tap_scale: Option<f32>,
}

impl Default for Motion {
    fn default() -> Self {
        Motion {
            x: 0.0,
            y: 0.0,
            fade: true,
            duration: 0.3,
            delay: 0.0,
            hover_scale: None,
            tap_scale: None,
        }
    }
}

impl Motion {
    pub fn fade_in(duration: f32) -> Self {
        Motion {
            duration,
            ..Default::default()
        }
    }

    pub fn slide_in(x: f32, y: f32, duration: f32) -> Self {
        Motion {
            x,
            y,
            duration,
            ..Default::default()
        }
    }

    pub fn delayed(self, delay: f32) -> Self {
        Motion { delay, ..self }
    }

    /// Adds `step` seconds of delay per position in a list.
    pub fn staggered(self, index: usize, step: f32) -> Self {
        Motion {
            delay: self.delay + index as f32 * step,
            ..self
        }
    }

    pub fn pressable(self, hover_scale: f32, tap_scale: f32) -> Self {
        Motion {
            hover_scale: Some(hover_scale),
            tap_scale: Some(tap_scale),
            ..self
        }
    }

    pub fn class(&self) -> &'static str {
        if self.hover_scale.is_some() || self.tap_scale.is_some() {
            "motion motion-press"
        } else {
            "motion"
        }
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "--motion-x: {:.0}px; --motion-y: {:.0}px; --motion-opacity: {}; \
             animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x,
            self.y,
            if self.fade { 0 } else { 1 },
            self.duration,
            self.delay,
        );

        if let Some(scale) = self.hover_scale {
            style.push_str(&format!(" --motion-hover: {scale:.2};"));
        }
        if let Some(scale) = self.tap_scale {
            style.push_str(&format!(" --motion-tap: {scale:.2};"));
        }

        style
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AnimatedProps {
    motion: Motion,
    #[props(into, default)]
    class: String,
    children: Element,
}

#[component]
pub fn Animated(props: AnimatedProps) -> Element {
    let class = if props.class.is_empty() {
        props.motion.class().to_owned()
    } else {
        format!("{} {}", props.motion.class(), props.class)
    };
    let style = props.motion.style();

    rsx! {
        div { class: "{class}", style: "{style}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_in_renders_offsets_and_timing() {
        let motion = Motion::slide_in(0.0, -20.0, 0.5);
        assert_eq!(
            motion.style(),
            "--motion-x: 0px; --motion-y: -20px; --motion-opacity: 0; \
             animation-duration: 0.50s; animation-delay: 0.00s;"
        );
        assert_eq!(motion.class(), "motion");
    }

    #[test]
    fn stagger_adds_delay_per_index() {
        let base = Motion::slide_in(-20.0, 0.0, 0.2);
        assert!(base.staggered(3, 0.1).style().contains("animation-delay: 0.30s"));

        let delayed = Motion::fade_in(0.5).delayed(0.2).staggered(2, 0.1);
        assert!(delayed.style().contains("animation-delay: 0.40s"));
    }

    #[test]
    fn pressable_motion_sets_scales() {
        let motion = Motion::slide_in(-20.0, 0.0, 0.2).pressable(1.05, 0.95);
        assert_eq!(motion.class(), "motion motion-press");

        let style = motion.style();
        assert!(style.contains("--motion-hover: 1.05;"));
        assert!(style.contains("--motion-tap: 0.95;"));
    }
}

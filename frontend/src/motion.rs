//! Enter/exit animation settings as plain structs, rendered to inline CSS.
//!
//! A component renders the `initial` pose on its first frame and flips to
//! `animate` once mounted; the CSS transition does the rest.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn faded() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub const fn offset_y(self, y: f32) -> Pose {
        Pose { y, ..self }
    }

    pub const fn offset_x(self, x: f32) -> Pose {
        Pose { x, ..self }
    }

    pub const fn scaled(self, scale: f32) -> Pose {
        Pose { scale, ..self }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub animate: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    pub const fn new(initial: Pose, animate: Pose) -> Self {
        Self {
            initial,
            animate,
            duration_ms: 400,
            delay_ms: 0,
        }
    }

    pub const fn duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    pub const fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn style(&self, entered: bool) -> String {
        let pose = if entered { self.animate } else { self.initial };
        format!(
            "{} transition: opacity {d}ms ease {w}ms, transform {d}ms ease {w}ms;",
            pose.to_css(),
            d = self.duration_ms,
            w = self.delay_ms
        )
    }
}

pub const FADE_UP: Motion = Motion::new(Pose::faded().offset_y(20.0), Pose::REST).duration(1000);
pub const CHAT_PANEL: Motion = Motion::new(Pose::faded().offset_y(20.0).scaled(0.9), Pose::REST);
pub const MODAL_CARD: Motion = Motion::new(Pose::REST.offset_y(20.0).scaled(0.9), Pose::REST);
pub const DETAIL_TEXT: Motion = Motion::new(Pose::faded().offset_x(20.0), Pose::REST);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_switches_pose_when_entered() {
        let motion = FADE_UP.delay(200);
        assert_eq!(
            motion.style(false),
            "opacity: 0; transform: translate(0px, 20px) scale(1); transition: opacity 1000ms ease 200ms, transform 1000ms ease 200ms;"
        );
        assert!(motion.style(true).starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
    }

    #[test]
    fn builders_keep_other_fields() {
        let pose = Pose::faded().offset_x(20.0).scaled(0.9);
        assert_eq!(pose, Pose { opacity: 0.0, x: 20.0, y: 0.0, scale: 0.9 });
        assert_eq!(CHAT_PANEL.duration_ms, 400);
    }
}

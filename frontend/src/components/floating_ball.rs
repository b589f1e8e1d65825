use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Red,
    Black,
}

impl Tone {
    fn gradient(self) -> &'static str {
        match self {
            Tone::Red => "radial-gradient(circle at 35% 35%, #FF4D5E, #D6001C, #850009)",
            Tone::Black => "radial-gradient(circle at 35% 35%, #555, #111, #000)",
        }
    }
}

/// A decorative Pilates ball drifting in a loop behind the hero copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub size: u32,
    pub tone: Tone,
    pub top: Option<&'static str>,
    pub left: Option<&'static str>,
    pub right: Option<&'static str>,
    pub bottom: Option<&'static str>,
    /// Seconds per drift cycle.
    pub duration: f64,
    pub delay: f64,
    pub blur: u32,
    pub z_index: i32,
}

impl Ball {
    pub const fn new(size: u32, tone: Tone, duration: f64, delay: f64, blur: u32) -> Self {
        Self {
            size,
            tone,
            top: None,
            left: None,
            right: None,
            bottom: None,
            duration,
            delay,
            blur,
            z_index: 0,
        }
    }

    pub const fn top(mut self, value: &'static str) -> Self {
        self.top = Some(value);
        self
    }

    pub const fn left(mut self, value: &'static str) -> Self {
        self.left = Some(value);
        self
    }

    pub const fn right(mut self, value: &'static str) -> Self {
        self.right = Some(value);
        self
    }

    pub const fn bottom(mut self, value: &'static str) -> Self {
        self.bottom = Some(value);
        self
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "width: {size}px; height: {size}px; background: {bg}; filter: blur({blur}px); z-index: {z}; animation-duration: {dur}s; animation-delay: {delay}s;",
            size = self.size,
            bg = self.tone.gradient(),
            blur = self.blur,
            z = self.z_index,
            dur = self.duration,
            delay = self.delay,
        );
        for (side, value) in [
            ("top", self.top),
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if let Some(value) = value {
                style.push_str(&format!(" {}: {};", side, value));
            }
        }
        style
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingBallProps {
    pub ball: Ball,
}

#[function_component(FloatingBall)]
pub fn floating_ball(props: &FloatingBallProps) -> Html {
    html! {
        <div class="floating-ball" style={props.ball.style()}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_places_only_given_sides() {
        let ball = Ball::new(180, Tone::Red, 6.0, 0.0, 2).top("10%").left("5%");
        let style = ball.style();
        assert!(style.contains("width: 180px; height: 180px;"));
        assert!(style.contains("#D6001C"));
        assert!(style.contains("filter: blur(2px);"));
        assert!(style.contains("animation-duration: 6s;"));
        assert!(style.contains(" top: 10%;"));
        assert!(style.contains(" left: 5%;"));
        assert!(!style.contains("right:"));
        assert!(!style.contains("bottom:"));
    }

    #[test]
    fn black_ball_uses_dark_gradient() {
        let style = Ball::new(60, Tone::Black, 4.0, 1.5, 1).bottom("-50px").style();
        assert!(style.contains("#111"));
        assert!(style.contains("animation-delay: 1.5s;"));
        assert!(style.contains(" bottom: -50px;"));
    }
}

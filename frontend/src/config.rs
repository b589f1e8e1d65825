use log::Level;

/// Scroll offset (px) past which the nav switches to its opaque style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Count-up duration used by every stats counter.
pub const COUNTER_DURATION_SECS: f64 = 2.5;

/// Shrinks the viewport by 50px, so a node counts as entered once it is
/// 50px inside the visible area.
pub const VIEWPORT_ROOT_MARGIN: &str = "-50px";

/// Delay added per card when the differentials grid reveals itself.
pub const REVEAL_STAGGER_MS: u32 = 100;

pub fn reveal_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(REVEAL_STAGGER_MS)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_delay_grows_by_stagger() {
        assert_eq!(reveal_delay_ms(0), 0);
        assert_eq!(reveal_delay_ms(1), 100);
        assert_eq!(reveal_delay_ms(5), 500);
    }
}

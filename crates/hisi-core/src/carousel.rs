// ── Carousel state machine ──
//
// Pure slide/pause logic shared by the hero and product carousels. Input
// events come from whatever surface renders the carousel; ticks come from
// an `AutoplayTimer`. Nothing here touches a clock directly.

use std::time::Duration;

use serde::Serialize;
use strum::Display;
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display)]
pub enum PlayState {
    #[default]
    Playing,
    Paused,
}

/// What happens when the pointer leaves a paused carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResumePolicy {
    ResumeOnLeave,
    StayPaused,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarouselConfig {
    pub interval: Duration,
    /// Minimum horizontal travel, in logical pixels, for a swipe.
    pub swipe_threshold: f32,
    pub resume: ResumePolicy,
}

impl CarouselConfig {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
    pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

    /// Home page hero: resumes when the pointer leaves.
    pub fn hero() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            swipe_threshold: Self::DEFAULT_SWIPE_THRESHOLD,
            resume: ResumePolicy::ResumeOnLeave,
        }
    }

    /// Featured product strip: stays paused once touched.
    pub fn product() -> Self {
        Self {
            resume: ResumePolicy::StayPaused,
            ..Self::hero()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left; show the next slide.
    Left,
    /// Finger moved right; show the previous slide.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    Tick,
    Next,
    Prev,
    GoTo(usize),
    HoverEnter,
    PointerLeave,
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    Key(CarouselKey),
    Focus(bool),
}

/// Classify a finished horizontal gesture. Travel must strictly exceed
/// `threshold`.
pub fn classify_swipe(start: f32, end: f32, threshold: f32) -> Option<SwipeDirection> {
    let distance = start - end;
    if distance > threshold {
        Some(SwipeDirection::Left)
    } else if distance < -threshold {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Carousel {
    config: CarouselConfig,
    len: usize,
    index: usize,
    state: PlayState,
    focused: bool,
    #[serde(skip)]
    touch_start: Option<f32>,
    #[serde(skip)]
    touch_end: Option<f32>,
}

impl Carousel {
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            len,
            index: 0,
            state: PlayState::Playing,
            focused: false,
            touch_start: None,
            touch_end: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replace the slide count, e.g. when live data replaces the fallback.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    /// Apply one input. Returns whether the visible slide changed.
    pub fn handle(&mut self, input: CarouselInput) -> bool {
        if self.len == 0 {
            return false;
        }
        let before = self.index;
        match input {
            CarouselInput::Tick => {
                if self.state == PlayState::Playing {
                    self.index = (self.index + 1) % self.len;
                }
            }
            CarouselInput::Next => self.navigate(self.index + 1),
            CarouselInput::Prev => self.navigate(self.index + self.len - 1),
            CarouselInput::GoTo(i) => {
                if i < self.len {
                    self.navigate(i);
                }
            }
            CarouselInput::HoverEnter => self.state = PlayState::Paused,
            CarouselInput::PointerLeave => {
                if self.config.resume == ResumePolicy::ResumeOnLeave {
                    self.state = PlayState::Playing;
                }
            }
            CarouselInput::TouchStart { x } => {
                self.state = PlayState::Paused;
                self.touch_start = Some(x);
                self.touch_end = None;
            }
            CarouselInput::TouchMove { x } => self.touch_end = Some(x),
            CarouselInput::TouchEnd => {
                let gesture = self.touch_start.take().zip(self.touch_end.take());
                if let Some((start, end)) = gesture {
                    match classify_swipe(start, end, self.config.swipe_threshold) {
                        Some(SwipeDirection::Left) => self.navigate(self.index + 1),
                        Some(SwipeDirection::Right) => self.navigate(self.index + self.len - 1),
                        None => {}
                    }
                }
            }
            CarouselInput::Key(key) => {
                if self.focused {
                    match key {
                        CarouselKey::ArrowLeft => self.navigate(self.index + self.len - 1),
                        CarouselKey::ArrowRight => self.navigate(self.index + 1),
                    }
                }
            }
            CarouselInput::Focus(focused) => self.focused = focused,
        }
        trace!(?input, index = self.index, state = %self.state, "carousel input");
        self.index != before
    }

    fn navigate(&mut self, target: usize) {
        self.index = target % self.len;
        self.state = PlayState::Paused;
    }
}

// ── Autoplay ─────────────────────────────────────────────────────────

/// Sends `message` every `period` until dropped.
#[derive(Debug)]
pub struct AutoplayTimer {
    _guard: DropGuard,
}

impl AutoplayTimer {
    pub fn spawn<M>(period: Duration, tx: mpsc::UnboundedSender<M>, message: M) -> Self
    where
        M: Clone + Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                tokio::select! {
                    () = child.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(message.clone()).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        Self {
            _guard: token.drop_guard(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hero(len: usize) -> Carousel {
        Carousel::new(len, CarouselConfig::hero())
    }

    #[test]
    fn ticks_wrap_around() {
        let mut c = hero(3);
        for _ in 0..3 {
            c.handle(CarouselInput::Tick);
        }
        assert_eq!(c.index(), 0);
        assert_eq!(c.state(), PlayState::Playing);
    }

    #[test]
    fn manual_navigation_pauses() {
        let mut c = hero(4);
        assert!(c.handle(CarouselInput::Prev));
        assert_eq!(c.index(), 3);
        assert_eq!(c.state(), PlayState::Paused);

        assert!(!c.handle(CarouselInput::Tick));
        assert_eq!(c.index(), 3);

        c.handle(CarouselInput::GoTo(1));
        assert_eq!(c.index(), 1);
        assert!(!c.handle(CarouselInput::GoTo(9)));
    }

    #[test]
    fn n_nexts_return_to_start() {
        let mut c = hero(5);
        for _ in 0..5 {
            c.handle(CarouselInput::Next);
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn pointer_leave_follows_resume_policy() {
        let mut hero = hero(3);
        hero.handle(CarouselInput::HoverEnter);
        hero.handle(CarouselInput::PointerLeave);
        assert_eq!(hero.state(), PlayState::Playing);

        let mut product = Carousel::new(3, CarouselConfig::product());
        product.handle(CarouselInput::HoverEnter);
        product.handle(CarouselInput::PointerLeave);
        assert_eq!(product.state(), PlayState::Paused);
    }

    fn swipe(c: &mut Carousel, from: f32, to: f32) -> bool {
        c.handle(CarouselInput::TouchStart { x: from });
        c.handle(CarouselInput::TouchMove { x: to });
        c.handle(CarouselInput::TouchEnd)
    }

    #[test]
    fn swipe_must_exceed_threshold() {
        let mut c = hero(3);
        assert!(!swipe(&mut c, 200.0, 151.0));
        assert!(!swipe(&mut c, 200.0, 150.0));
        assert!(swipe(&mut c, 200.0, 149.0));
        assert_eq!(c.index(), 1);
        assert!(swipe(&mut c, 100.0, 151.0));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let mut c = hero(3);
        c.handle(CarouselInput::TouchStart { x: 300.0 });
        assert!(!c.handle(CarouselInput::TouchEnd));
        assert_eq!(c.state(), PlayState::Paused);
    }

    #[test]
    fn arrow_keys_need_focus() {
        let mut c = hero(3);
        assert!(!c.handle(CarouselInput::Key(CarouselKey::ArrowRight)));
        c.handle(CarouselInput::Focus(true));
        assert!(c.handle(CarouselInput::Key(CarouselKey::ArrowRight)));
        assert!(c.handle(CarouselInput::Key(CarouselKey::ArrowLeft)));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_carousel_ignores_input() {
        let mut c = hero(0);
        for input in [
            CarouselInput::Tick,
            CarouselInput::Next,
            CarouselInput::Prev,
            CarouselInput::GoTo(0),
            CarouselInput::HoverEnter,
        ] {
            assert!(!c.handle(input));
        }
        assert_eq!(c.index(), 0);
        assert_eq!(c.state(), PlayState::Playing);
    }

    #[test]
    fn shrinking_resets_out_of_range_index() {
        let mut c = hero(5);
        c.handle(CarouselInput::GoTo(4));
        c.set_len(3);
        assert_eq!(c.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_ticks_until_dropped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = AutoplayTimer::spawn(Duration::from_secs(5), tx, CarouselInput::Tick);

        let started = tokio::time::Instant::now();
        assert_eq!(rx.recv().await, Some(CarouselInput::Tick));
        assert!(started.elapsed() >= Duration::from_secs(5));

        drop(timer);
        assert_eq!(rx.recv().await, None);
    }
}

//! Entrance animation timing.
//!
//! Every animated element on the page is described by a [`Reveal`]: what
//! triggers it, how long it runs, when it starts, and where it slides in
//! from. Reveals are plain values so timing can be checked without a
//! browser. The UI turns them into CSS custom properties and data
//! attributes (see [`Reveal::style`]); a small observer script flips the
//! `visible` class exactly once per element.
//!
//! Stagger is a pure function of list position: item `k` starts
//! `k * STAGGER_STEP` after the first.

use std::time::Duration;

/// Default entrance duration
pub const BASE_DURATION: Duration = Duration::from_millis(600);

/// Short entrance used inside the pricing card
pub const SHORT_DURATION: Duration = Duration::from_millis(500);

/// Delay added per list position
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Shared easing curve
pub const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Viewport margin for feature cards, so they reveal slightly after entering
pub const CARD_VIEWPORT_MARGIN_PX: i32 = -50;

/// Start delay of the item at `index` in an ordered list
pub fn stagger_delay(index: usize) -> Duration {
    let steps = u32::try_from(index).unwrap_or(u32::MAX);
    STAGGER_STEP.saturating_mul(steps)
}

/// What starts a reveal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    /// As soon as the page is interactive
    Mount,
    /// First time the element intersects the viewport; never replays
    Viewport,
}

impl RevealTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealTrigger::Mount => "mount",
            RevealTrigger::Viewport => "view",
        }
    }
}

/// Starting pose an element animates away from. Opacity always starts at 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
    pub scale: f64,
}

impl Offset {
    pub const NONE: Offset = Offset {
        x: 0,
        y: 0,
        scale: 1.0,
    };

    pub const fn rise(y: i32) -> Self {
        Offset { x: 0, y, scale: 1.0 }
    }

    pub const fn slide(x: i32) -> Self {
        Offset { x, y: 0, scale: 1.0 }
    }

    pub const fn grow(scale: f64) -> Self {
        Offset { x: 0, y: 0, scale }
    }
}

/// One element's entrance animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub trigger: RevealTrigger,
    pub duration: Duration,
    pub delay: Duration,
    pub from: Offset,
    /// Viewport root margin in px; only meaningful for viewport reveals
    pub margin_px: i32,
}

impl Reveal {
    pub const fn on_mount(from: Offset) -> Self {
        Reveal {
            trigger: RevealTrigger::Mount,
            duration: BASE_DURATION,
            delay: Duration::ZERO,
            from,
            margin_px: 0,
        }
    }

    pub const fn in_view(from: Offset) -> Self {
        Reveal {
            trigger: RevealTrigger::Viewport,
            duration: BASE_DURATION,
            delay: Duration::ZERO,
            from,
            margin_px: 0,
        }
    }

    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub const fn margin(mut self, px: i32) -> Self {
        self.margin_px = px;
        self
    }

    /// Inline style carrying the pose and timing
    pub fn style(&self) -> String {
        format!(
            "--reveal-x:{}px;--reveal-y:{}px;--reveal-scale:{};transition-duration:{}ms;transition-delay:{}ms",
            self.from.x,
            self.from.y,
            self.from.scale,
            self.duration.as_millis(),
            self.delay.as_millis()
        )
    }

    /// Value for the `data-reveal-margin` attribute
    pub fn margin_attr(&self) -> String {
        format!("{}px", self.margin_px)
    }
}

/// Entrance of the feature card at `index`
pub fn feature_card(index: usize) -> Reveal {
    Reveal::in_view(Offset::rise(40))
        .delay(stagger_delay(index))
        .margin(CARD_VIEWPORT_MARGIN_PX)
}

/// Entrance of the feature grid heading block
pub const FEATURES_HEADING: Reveal = Reveal::in_view(Offset::rise(30));

/// Hero image column
pub const HERO_IMAGE: Reveal = Reveal::on_mount(Offset::slide(-40));

/// Hero details column
pub const HERO_DETAILS: Reveal =
    Reveal::on_mount(Offset::slide(40)).delay(Duration::from_millis(200));

/// Text-bearing elements of the hero details column, in reading order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroStep {
    Name,
    Benefit,
    Price,
    CallToAction,
    TrustPoints,
}

impl HeroStep {
    pub const ALL: [HeroStep; 5] = [
        HeroStep::Name,
        HeroStep::Benefit,
        HeroStep::Price,
        HeroStep::CallToAction,
        HeroStep::TrustPoints,
    ];

    /// Hand-authored start delay; does not depend on product data
    pub fn delay(&self) -> Duration {
        let ms = match self {
            HeroStep::Name => 300,
            HeroStep::Benefit => 400,
            HeroStep::Price => 500,
            HeroStep::CallToAction => 600,
            HeroStep::TrustPoints => 700,
        };
        Duration::from_millis(ms)
    }

    pub fn reveal(&self) -> Reveal {
        let from = match self {
            HeroStep::TrustPoints => Offset::NONE,
            _ => Offset::rise(20),
        };
        Reveal::on_mount(from).delay(self.delay())
    }
}

/// Pricing card container
pub const PRICING_CARD: Reveal = Reveal::in_view(Offset::rise(40));

/// Pricing amount block
pub const PRICING_AMOUNT: Reveal = Reveal::in_view(Offset::grow(0.9))
    .duration(SHORT_DURATION)
    .delay(Duration::from_millis(200));

/// Pricing call-to-action button
pub const PRICING_BUTTON: Reveal = Reveal::in_view(Offset::rise(20))
    .duration(SHORT_DURATION)
    .delay(Duration::from_millis(300));

/// Trust badge row; one shared reveal, not staggered
pub const PRICING_BADGES: Reveal = Reveal::in_view(Offset::NONE)
    .duration(SHORT_DURATION)
    .delay(Duration::from_millis(400));

/// Hover micro-animation on a feature card icon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverLift {
    pub scale: f64,
    pub rotate_deg: f64,
}

pub const ICON_HOVER: HoverLift = HoverLift {
    scale: 1.1,
    rotate_deg: 5.0,
};

impl HoverLift {
    pub fn style(&self) -> String {
        format!(
            "--hover-scale:{};--hover-rotate:{}deg",
            self.scale, self.rotate_deg
        )
    }
}

use std::time::Duration;

use tachyonfx::Interpolation;

use crate::card::CardId;

/// Animatable sprite properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Scale,
}

/// Target values for a tween. Properties left as `None` are not touched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TweenTo {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
}

impl TweenTo {
    pub fn x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn position(self, x: f32, y: f32) -> Self {
        self.x(x).y(y)
    }

    fn tracks(&self) -> impl Iterator<Item = (Property, f32)> {
        [
            self.x.map(|v| (Property::X, v)),
            self.y.map(|v| (Property::Y, v)),
            self.scale.map(|v| (Property::Scale, v)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Target values plus the duration and curve to reach them with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub to: TweenTo,
    pub duration: Duration,
    pub easing: Interpolation,
}

impl TweenSpec {
    pub fn new(to: TweenTo, duration: Duration, easing: Interpolation) -> Self {
        Self {
            to,
            duration,
            easing,
        }
    }
}

#[derive(Debug, Clone)]
struct Track {
    property: Property,
    from: f32,
    to: f32,
}

#[derive(Debug, Clone)]
struct Tween {
    target: CardId,
    tracks: Vec<Track>,
    elapsed: Duration,
    duration: Duration,
    easing: Interpolation,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Runs every in-flight tween.
///
/// Starting a tween on a target takes its properties over from any older
/// tween on the same target; the older tween keeps animating whatever
/// properties it has left and is dropped once it has none.
#[derive(Debug, Default)]
pub struct Tweens {
    active: Vec<Tween>,
}

impl Tweens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween. `current` reads the target's present value of a
    /// property; interpolation starts from there.
    pub fn add(
        &mut self,
        target: CardId,
        spec: TweenSpec,
        current: impl Fn(Property) -> f32,
    ) {
        let tracks: Vec<Track> = spec
            .to
            .tracks()
            .map(|(property, to)| Track {
                property,
                from: current(property),
                to,
            })
            .collect();
        if tracks.is_empty() {
            return;
        }

        for tween in self.active.iter_mut().filter(|t| t.target == target) {
            tween
                .tracks
                .retain(|old| !tracks.iter().any(|new| new.property == old.property));
        }
        self.active.retain(|t| !t.tracks.is_empty());

        self.active.push(Tween {
            target,
            tracks,
            elapsed: Duration::ZERO,
            duration: spec.duration,
            easing: spec.easing,
        });
    }

    /// Step every tween by `dt`, writing interpolated values through
    /// `apply`. Returns the targets of tweens that finished this step, in
    /// the order they were started.
    pub fn advance(
        &mut self,
        dt: Duration,
        mut apply: impl FnMut(CardId, Property, f32),
    ) -> Vec<CardId> {
        let mut finished = Vec::new();
        for tween in &mut self.active {
            tween.elapsed = (tween.elapsed + dt).min(tween.duration);
            let done = tween.elapsed >= tween.duration;
            let eased = tween.easing.alpha(tween.progress());
            for track in &tween.tracks {
                let value = if done {
                    track.to
                } else {
                    track.from + (track.to - track.from) * eased
                };
                apply(tween.target, track.property, value);
            }
            if done {
                finished.push(tween.target);
            }
        }
        self.active.retain(|t| t.elapsed < t.duration);
        finished
    }

    pub fn is_tweening(&self, target: CardId) -> bool {
        self.active.iter().any(|t| t.target == target)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

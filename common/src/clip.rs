//! Clip identifiers and the fixed three-slot table keyed by them.

/// The three animation clips a character can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipId {
    IdleA,
    IdleB,
    Walk,
}

impl ClipId {
    pub const ALL: [ClipId; 3] = [ClipId::IdleA, ClipId::IdleB, ClipId::Walk];

    pub fn name(&self) -> &'static str {
        match self {
            ClipId::IdleA => "idle_a",
            ClipId::IdleB => "idle_b",
            ClipId::Walk => "walk",
        }
    }
}

impl std::fmt::Display for ClipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value per clip. Used for bindings, animation graph nodes and blend weights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipSet<T> {
    pub idle_a: T,
    pub idle_b: T,
    pub walk: T,
}

impl<T> ClipSet<T> {
    pub fn new(idle_a: T, idle_b: T, walk: T) -> Self {
        Self {
            idle_a,
            idle_b,
            walk,
        }
    }

    pub fn from_fn(mut f: impl FnMut(ClipId) -> T) -> Self {
        Self {
            idle_a: f(ClipId::IdleA),
            idle_b: f(ClipId::IdleB),
            walk: f(ClipId::Walk),
        }
    }

    pub fn get(&self, clip: ClipId) -> &T {
        match clip {
            ClipId::IdleA => &self.idle_a,
            ClipId::IdleB => &self.idle_b,
            ClipId::Walk => &self.walk,
        }
    }

    pub fn get_mut(&mut self, clip: ClipId) -> &mut T {
        match clip {
            ClipId::IdleA => &mut self.idle_a,
            ClipId::IdleB => &mut self.idle_b,
            ClipId::Walk => &mut self.walk,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClipId, &T)> + '_ {
        ClipId::ALL.into_iter().map(move |clip| (clip, self.get(clip)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(ClipId, &T) -> U) -> ClipSet<U> {
        ClipSet::from_fn(|clip| f(clip, self.get(clip)))
    }
}

/// Metadata for a clip that has a playable animation bound to the skeleton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBinding {
    /// Length of one cycle. Zero means unknown; play time then grows without wrapping.
    pub duration_seconds: f32,
}

impl ClipBinding {
    pub fn new(duration_seconds: f32) -> Self {
        Self {
            duration_seconds: duration_seconds.max(0.0),
        }
    }
}

/// Which clips have a bound animation. An unbound clip is `None`.
pub type ClipBindings = ClipSet<Option<ClipBinding>>;

impl ClipBindings {
    /// Every clip bound with the given cycle length.
    pub fn all(duration_seconds: f32) -> Self {
        ClipSet::from_fn(|_| Some(ClipBinding::new(duration_seconds)))
    }
}

use std::cmp::{max, min};

/// Integer axis-aligned minimum bounding rectangle.
///
/// The default value is the empty envelope: the identity of `extend`,
/// with sentinel bounds that lose against any real coordinate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Envelope {
    pub x_min: i64,
    pub y_min: i64,
    pub x_max: i64,
    pub y_max: i64,
}

pub trait HasEnvelope {
    fn envelope(&self) -> Envelope;
}

impl HasEnvelope for Envelope {
    fn envelope(&self) -> Envelope {
        *self
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope::new_empty()
    }
}

impl Envelope {
    pub fn new(x_min: i64, y_min: i64, x_max: i64, y_max: i64) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "malformed envelope: ({}, {}, {}, {})",
            x_min,
            y_min,
            x_max,
            y_max
        );
        Envelope {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn point(x: i64, y: i64) -> Self {
        Envelope::new(x, y, x, y)
    }

    pub fn new_empty() -> Self {
        Envelope {
            x_min: i64::MAX,
            y_min: i64::MAX,
            x_max: i64::MIN,
            y_max: i64::MIN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    pub fn of<T: HasEnvelope>(items: &[T]) -> Self {
        items.iter().fold(Envelope::new_empty(), |mut s, r| {
            s.extend(&r.envelope());
            s
        })
    }

    pub fn area(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// Half-perimeter.
    pub fn margin(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        (self.x_max - self.x_min) + (self.y_max - self.y_min)
    }

    pub fn extend(&mut self, other: &Envelope) {
        self.x_min = min(self.x_min, other.x_min);
        self.y_min = min(self.y_min, other.y_min);
        self.x_max = max(self.x_max, other.x_max);
        self.y_max = max(self.y_max, other.y_max);
    }

    /// Non-strict: touching edges count as intersecting.
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }

    /// Non-strict: an envelope contains itself.
    pub fn contains(&self, other: &Envelope) -> bool {
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    /// Area of the union of the two envelopes. Callers must not pass the
    /// empty envelope; the sentinel bounds would overflow.
    pub fn enlarged_area(&self, other: &Envelope) -> i64 {
        (max(self.x_max, other.x_max) - min(self.x_min, other.x_min))
            * (max(self.y_max, other.y_max) - min(self.y_min, other.y_min))
    }

    pub fn intersection_area(&self, other: &Envelope) -> i64 {
        let dx = min(self.x_max, other.x_max) - max(self.x_min, other.x_min);
        let dy = min(self.y_max, other.y_max) - max(self.y_min, other.y_min);
        max(0, dx) * max(0, dy)
    }
}

use rand::Rng;

/// Axis-aligned rectangle given by its four edges.
///
/// Y grows downward, so the "top" of a bound is its `min_y` edge.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bound {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Same bound moved by `(dx, dy)`.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    /// Finite edges with `min <= max` on both axes. Zero-area bounds are valid items.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Valid and with a strictly positive extent on both axes.
    pub fn has_area(&self) -> bool {
        self.is_valid() && self.max_x > self.min_x && self.max_y > self.min_y
    }

    /// Random bound inside `self` with each side in `1.0..=max_size`.
    pub fn get_random_bound_inside<R: Rng>(&self, max_size: f32, rng: &mut R) -> Bound {
        let width = Self::safe_randf32(rng, 1.0, max_size.min(self.width()));
        let height = Self::safe_randf32(rng, 1.0, max_size.min(self.height()));
        let min_x = Self::safe_randf32(rng, self.min_x, self.max_x - width);
        let min_y = Self::safe_randf32(rng, self.min_y, self.max_y - height);
        Bound::new(
            min_x,
            min_y,
            (min_x + width).min(self.max_x),
            (min_y + height).min(self.max_y),
        )
    }

    fn safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

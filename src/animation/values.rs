pub trait Interpolatable: Copy + Clone + Sized {
    /// `start + (end - start) * t`.
    ///
    /// Implementations must return `start` exactly at `t == 0.0` and `end`
    /// exactly at `t == 1.0`.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        // Weighted form: exact at both endpoints, unlike start + (end - start) * t.
        start * (1.0 - t) + end * t
    }
}

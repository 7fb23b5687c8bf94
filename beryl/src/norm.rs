/// Types with a Euclidean norm that can be rescaled to unit length.
pub trait Normed {
    fn norm(&self) -> f32;

    fn norm_squared(&self) -> f32 {
        let n = self.norm();
        n * n
    }

    fn unscale_mut(&mut self, n: f32);

    fn normalize_mut(&mut self) {
        let n = self.norm();
        self.unscale_mut(n);
    }
}

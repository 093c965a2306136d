use rand::Rng;

/// Source of uniformly distributed integers, used only for food placement
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..=high)
    }
}

use dasp_sample::Duplex;

/// Sample types decoded audio can be converted into.
///
/// Raw samples are 8, 16 or 32-bit signed integers, so any target must
/// convert to and from all three.
pub trait Sample: dasp_sample::Sample + Duplex<i8> + Duplex<i16> + Duplex<i32> {}

impl Sample for i8 {}
impl Sample for i16 {}
impl Sample for i32 {}
impl Sample for f32 {}
impl Sample for f64 {}

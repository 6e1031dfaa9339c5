use nalgebra::{Scalar, Vector2};

#[inline]
pub fn get_angle<T: num::Float + Scalar>(vec: &Vector2<T>) -> T {
    vec.y.atan2(vec.x)
}

#[inline]
pub fn get_components<T: num::Float + Scalar>(magnitude: T, angle: T) -> Vector2<T> {
    Vector2::new(magnitude * angle.cos(), magnitude * angle.sin())
}

/// Point on a circle of `radius` around `center` at `angle`, in screen space.
#[inline]
pub fn orbit_point(center: [f64; 2], radius: f64, angle: f64) -> [f64; 2] {
    let offset = get_components(radius, angle);
    [center[0] + offset.x, center[1] + offset.y]
}

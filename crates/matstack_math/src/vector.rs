use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

use crate::number_traits::{Float, Zero};

pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where
            T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
        {
            pub fn dot(&self, other: &Self) -> T {
                let mut dot = T::zero();
                $(dot = dot + self.$dim * other.$dim;)*
                dot
            }
        }

        impl<T> $name<T>
        where
            T: Float,
        {
            pub fn norm(&self) -> T {
                self.dot(self).sqrt()
            }

            /// Divides every component by the Euclidean norm. The norm is
            /// computed in double precision. A zero vector yields NaN
            /// components.
            pub fn normalized(&self) -> Self {
                let mut squared = 0.0_f64;
                $(squared += self.$dim.widen() * self.$dim.widen();)*
                let norm = T::narrow(squared.sqrt());
                Self {
                    $($dim: self.$dim / norm),*
                }
            }
        }

        impl<T> Default for $name<T>
        where
            T: Zero,
        {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>,
        {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>,
        {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>,
        {
            type Output = Self;

            fn mul(self, scalar: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * scalar),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>,
        {
            fn mul_assign(&mut self, scalar: T) {
                $(self.$dim = self.$dim * scalar;)*
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>,
        {
            type Output = Self;

            fn div(self, scalar: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / scalar),*
                }
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T> {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*) {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }
    };
}

struct_vec!(Vector3: "({}, {}, {})", (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

impl<T> Vector3<T>
where
    T: Copy + Float,
{
    /// Right-handed cross product. `a.cross(&b) == -b.cross(&a)`.
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }
}

impl<T> From<[T; 3]> for Vector3<T>
where
    T: Copy,
{
    fn from(value: [T; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T> From<[T; 4]> for Vector4<T>
where
    T: Copy,
{
    fn from(value: [T; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn vector3_new() {
        let v = Vector3::new(1, 2, 3);

        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
    }

    #[test]
    fn add_and_sub() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 3, 2);

        assert_eq!(a + b, Vector3::new(5, 5, 5));
        assert_eq!(a - b, Vector3::new(-3, -1, 1));
    }

    #[test]
    fn scalar_product() {
        let v = Vector3f::new(1.0, -2.0, 3.0);

        let result = v * 2.5;

        assert_float_absolute_eq!(result.x, 2.5, 0.000_001);
        assert_float_absolute_eq!(result.y, -5.0, 0.000_001);
        assert_float_absolute_eq!(result.z, 7.5, 0.000_001);
    }

    #[test]
    fn mul_assign_scalar() {
        let mut vec = Vector3::new(1, 2, 3);

        vec *= 5;

        assert_eq!(vec, Vector3::new(5, 10, 15));
    }

    #[test]
    fn div_scalar() {
        let v = Vector4::new(5, 10, 15, 20);

        assert_eq!(v / 5, Vector4::new(1, 2, 3, 4));
    }

    #[test]
    fn display() {
        assert_eq!("(1, 2, 3)", format!("{}", Vector3::new(1, 2, 3)));
        assert_eq!("(1, 2, 3, 4)", format!("{}", Vector4::new(1, 2, 3, 4)));
    }

    #[test]
    fn dot() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, -5.0, 6.0);

        assert_float_absolute_eq!(a.dot(&b), 12.0, 0.000_001);
    }

    #[test]
    fn dot_is_commutative() {
        let pairs = [
            (Vector3f::new(1.5, -2.0, 0.25), Vector3f::new(-3.0, 7.0, 11.0)),
            (Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(1.0, 2.0, 3.0)),
            (Vector3f::new(1e3, 1e-3, -4.0), Vector3f::new(0.5, 8.0, 2.0)),
        ];

        for (a, b) in pairs {
            assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    #[test]
    fn dot4() {
        let a = Vector4f::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4f::new(5.0, 6.0, 7.0, 8.0);

        assert_float_absolute_eq!(a.dot(&b), 70.0, 0.000_001);
        assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn dot_propagates_nan() {
        let a = Vector3f::new(f32::NAN, 0.0, 0.0);

        assert!(a.dot(&Vector3f::new(1.0, 1.0, 1.0)).is_nan());
    }

    #[test]
    fn norm() {
        let vector = Vector3::new(1.0, 2.0, 3.0);
        assert_float_absolute_eq!(vector.norm(), 3.74, 0.01);
    }

    #[test]
    fn normalized() {
        let vector = Vector3::new(1.0, 2.0, 3.0);

        let normalized = vector.normalized();

        assert_float_absolute_eq!(normalized.x, 0.26, 0.01);
        assert_float_absolute_eq!(normalized.y, 0.53, 0.01);
        assert_float_absolute_eq!(normalized.z, 0.80, 0.01);
    }

    #[test]
    fn normalized_has_unit_norm() {
        let vectors = [
            Vector3f::new(3.0, 4.0, 0.0),
            Vector3f::new(-0.001, 0.002, 0.0005),
            Vector3f::new(1e-23, 0.0, 0.0),
            Vector3f::new(0.0, -2e-30, 1e-30),
            Vector3f::new(1e20, 0.0, 0.0),
            Vector3f::new(3e19, 4e19, 0.0),
            Vector3f::new(1200.0, -50.0, 7.0),
        ];

        for v in vectors {
            assert_float_absolute_eq!(v.normalized().norm(), 1.0, 0.000_01);
        }
    }

    #[test]
    fn normalized_extreme_magnitudes_stay_finite() {
        let tiny = Vector3f::new(1e-23, 0.0, 0.0).normalized();
        let huge = Vector3f::new(3e19, 4e19, 0.0).normalized();

        assert_eq!(tiny, Vector3f::new(1.0, 0.0, 0.0));
        assert_float_absolute_eq!(huge.x, 0.6, 0.000_01);
        assert_float_absolute_eq!(huge.y, 0.8, 0.000_01);
        assert_float_absolute_eq!(huge.z, 0.0, 0.000_01);
    }

    #[test]
    fn normalized_zero_vector_is_nan() {
        let normalized = Vector3f::default().normalized();

        assert!(normalized.x.is_nan());
        assert!(normalized.y.is_nan());
        assert!(normalized.z.is_nan());
    }

    #[test]
    fn cross_vec3() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        let result = a.cross(&b);

        assert_float_absolute_eq!(result.x, -3.0, 0.01);
        assert_float_absolute_eq!(result.y, 6.0, 0.01);
        assert_float_absolute_eq!(result.z, -3.0, 0.01);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vector3f::new(1.0, 0.0, 0.0);
        let y = Vector3f::new(0.0, 1.0, 0.0);

        assert_eq!(x.cross(&y), Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn cross_is_anti_commutative() {
        let a = Vector3f::new(0.5, -1.5, 2.0);
        let b = Vector3f::new(3.0, 4.0, -7.25);

        let ab = a.cross(&b);
        let ba = b.cross(&a) * -1.0;

        assert_float_absolute_eq!(ab.x, ba.x, 0.000_001);
        assert_float_absolute_eq!(ab.y, ba.y, 0.000_001);
        assert_float_absolute_eq!(ab.z, ba.z, 0.000_001);
        assert_eq!(-ab, b.cross(&a));
    }

    #[test]
    fn default() {
        let vector = Vector4::<f32>::default();

        assert_float_absolute_eq!(vector.x, 0.0, 0.0);
        assert_float_absolute_eq!(vector.y, 0.0, 0.0);
        assert_float_absolute_eq!(vector.z, 0.0, 0.0);
        assert_float_absolute_eq!(vector.w, 0.0, 0.0);
    }

    #[test]
    fn from_tuple_and_array() {
        let v = Vector4::from((0, 1, 2, 3));
        let tuple: (i32, i32, i32, i32) = v.into();
        let array: [i32; 3] = Vector3::from([4, 5, 6]).into();

        assert_eq!(v, Vector4::from([0, 1, 2, 3]));
        assert_eq!(tuple, (0, 1, 2, 3));
        assert_eq!(array, [4, 5, 6]);
    }
}

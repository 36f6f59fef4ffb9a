// src/numerics/types/vector.rs
// Vector<T, N> generic implementation over a compile-time dimension.
// Uses the Scalar and Real traits from super::traits.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::error::DimensionMismatch;
use super::traits::{Real, Scalar};

/// Vector is a fixed-size numeric tuple of `N` elements of type `T`.
///
/// Storage is an inline array: no heap allocation, and the dimension is part
/// of the type, so operations combining two vectors only type-check when both
/// share `T` and `N`.
///
/// Value-level preconditions (index range, zero divisor, slice length) are
/// checked with `debug_assert!` only. Dimension-level ones (`cross` outside
/// 3D, `w()` below 4D) are rejected at compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    pub data: [T; N],
}

/// 2D vector, `f32` by default.
pub type Vector2<T = f32> = Vector<T, 2>;
/// 3D vector, `f32` by default.
pub type Vector3<T = f32> = Vector<T, 3>;
/// 4D vector (homogeneous coordinates), `f32` by default.
pub type Vector4<T = f32> = Vector<T, 4>;

impl<T, const N: usize> Vector<T, N> {
    /// Dimension known at compile time.
    pub const DIM: usize = N;

    /// Construct a new Vector from exactly `N` values.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Apply `f` to every element, producing a vector of the same dimension.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector { data: self.data.map(f) }
    }

    /// Element at `index` without a bounds check in release builds.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "Index out of bounds");
        // SAFETY: the caller guarantees index < N.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Mutable element at `index` without a bounds check in release builds.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "Index out of bounds");
        // SAFETY: the caller guarantees index < N.
        unsafe { self.data.get_unchecked_mut(index) }
    }
}

// Named coordinate accessors. The inline const blocks are evaluated per
// instantiation, so `v.z()` on a Vector2 fails to build.
impl<T: Copy, const N: usize> Vector<T, N> {
    #[inline]
    pub fn x(&self) -> T {
        const { assert!(N >= 1, "x() requires a vector of dimension 1 or more") };
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        const { assert!(N >= 2, "y() requires a vector of dimension 2 or more") };
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        const { assert!(N >= 3, "z() requires a vector of dimension 3 or more") };
        self.data[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        const { assert!(N >= 4, "w() requires a vector of dimension 4 or more") };
        self.data[3]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        const { assert!(N >= 1, "x_mut() requires a vector of dimension 1 or more") };
        &mut self.data[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        const { assert!(N >= 2, "y_mut() requires a vector of dimension 2 or more") };
        &mut self.data[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        const { assert!(N >= 3, "z_mut() requires a vector of dimension 3 or more") };
        &mut self.data[2]
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        const { assert!(N >= 4, "w_mut() requires a vector of dimension 4 or more") };
        &mut self.data[3]
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Vector of all zeros
    #[inline]
    pub fn zero() -> Self {
        Self { data: [T::zero(); N] }
    }

    /// Vector with every element equal to `value`
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Construct from a runtime-sized list of values.
    ///
    /// The length must be `N`; debug builds assert it. In release builds the
    /// overlapping prefix is copied and any missing trailing elements stay
    /// zero. Use `Vector::try_from(slice)` for a checked conversion.
    pub fn from_slice(values: &[T]) -> Self {
        debug_assert_eq!(values.len(), N, "Initializer list size mismatch");
        let mut out = Self::zero();
        for (dst, &src) in out.data.iter_mut().zip(values) {
            *dst = src;
        }
        out
    }

    /// Dot product: sum of element-wise products.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |sum, (&a, &b)| sum + a * b)
    }

    /// Squared Euclidean length. Prefer it over `norm` for comparisons.
    #[inline]
    pub fn norm_sq(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn distance_sq(&self, other: &Self) -> T {
        (*other - *self).norm_sq()
    }

    /// Element-wise (Hadamard) product.
    #[inline]
    pub fn component_mul(mut self, other: &Self) -> Self {
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a *= b;
        }
        self
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Euclidean length.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_sq().sqrt()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        self.distance_sq(other).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Returns the zero vector when the length is below
    /// [`NORMALIZE_EPSILON`](super::traits::NORMALIZE_EPSILON) instead of
    /// dividing by a near-zero length.
    pub fn normalized(&self) -> Self {
        let len = self.norm();
        if len < T::normalize_epsilon() {
            tracing::trace!(dimension = N, "near-zero length, normalized to the zero vector");
            return Self::zero();
        }
        *self / len
    }

    /// Normalize in place; see [`Vector::normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Right-handed cross product. Only exists for 3D vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let [x1, y1, z1] = self.data;
        let [x2, y2, z2] = other.data;
        Self::new([y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2])
    }
}

/// Free-function form of [`Vector::dot`].
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.dot(b)
}

/// Free-function form of [`Vector::cross`].
#[inline]
pub fn cross<T: Scalar>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

// Indexing is range-checked by a debug assertion carrying the diagnostic.
// Release builds keep the standard array bounds check here, since safe
// indexing cannot be unchecked; `get_unchecked` is the unchecked path.

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < N, "Index out of bounds");
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "Index out of bounds");
        &mut self.data[index]
    }
}

// Compound assignment operators carry the arithmetic; the binary operators
// below take their left operand by value and delegate here.

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a += b;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a -= b;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        for a in self.data.iter_mut() {
            *a *= scalar;
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    /// One division for the reciprocal, then `N` multiplications.
    ///
    /// For integer `T` the reciprocal truncates, so dividing by anything
    /// other than 1 or -1 yields the zero vector.
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        debug_assert!(scalar != T::zero(), "Division by zero");
        let inv_scalar = T::one() / scalar;
        *self *= inv_scalar;
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(mut self, scalar: T) -> Self {
        self /= scalar;
        self
    }
}

impl<'a, T: Scalar, const N: usize> Add<&'a Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn add(self, rhs: &'a Vector<T, N>) -> Vector<T, N> {
        *self + *rhs
    }
}

impl<'a, T: Scalar, const N: usize> Sub<&'a Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn sub(self, rhs: &'a Vector<T, N>) -> Vector<T, N> {
        *self - *rhs
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

// Scalar on the left: `2.0 * v`. Coherence rules out a blanket impl over T,
// so each primitive gets its own.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, mut rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs *= self;
                    rhs
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Scalar, const N: usize> Sum for Vector<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

// Conversions between Vector<T, N> and arrays [T; N]

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self { data: *data }
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = DimensionMismatch;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        let data = <[T; N]>::try_from(values).map_err(|_| DimensionMismatch {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self { data })
    }
}

// Conversions between low-dimension vectors and tuples

impl<T> From<(T, T)> for Vector<T, 2> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new([x, y])
    }
}

impl<T> From<(T, T, T)> for Vector<T, 3> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new([x, y, z])
    }
}

impl<T> From<Vector<T, 3>> for (T, T, T) {
    #[inline]
    fn from(v: Vector<T, 3>) -> Self {
        let [x, y, z] = v.data;
        (x, y, z)
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Renders as `[v0, v1, ...]`. Width and precision flags apply per element.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

// Tolerance comparisons, element by element.

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

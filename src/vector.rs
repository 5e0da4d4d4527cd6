//! Fixed size value vector
use core::ops::{Deref, Index, IndexMut, Neg};

/// A fixed length homogeneous sequence with value semantics
///
/// All operations return new vectors. Size relations between inputs and
/// outputs are checked at compile time.
///
/// ```
/// use embedded_iir::Vector;
/// let v = Vector([3.0, 1.0, 2.0]);
/// assert_eq!(v.sort(|a, b| a < b), Vector([1.0, 2.0, 3.0]));
/// let w: Vector<_, 2> = v.subvector::<1, 2>();
/// assert_eq!(w, Vector([1.0, 2.0]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self(core::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> Deref for Vector<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.transform(|x| -x)
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Number of elements
    pub const fn size(&self) -> usize {
        N
    }

    /// All elements equal to `value`
    pub const fn full(value: T) -> Self {
        Self([value; N])
    }

    /// Create from a function of the index
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Apply `f` elementwise
    pub fn transform<U>(&self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Right to left fold starting from `initial`
    ///
    /// `f(..f(f(initial, v[N - 1]), v[N - 2]).., v[0])`
    pub fn reduce<A>(&self, f: impl FnMut(A, T) -> A, initial: A) -> A {
        self.0.iter().rev().copied().fold(initial, f)
    }

    /// Concatenate
    ///
    /// ```
    /// # use embedded_iir::Vector;
    /// let v: Vector<_, 5> = Vector([1, 2]).append(&Vector([3, 4, 5]));
    /// assert_eq!(v, Vector([1, 2, 3, 4, 5]));
    /// ```
    pub fn append<const M: usize, const L: usize>(&self, other: &Vector<T, M>) -> Vector<T, L> {
        const { assert!(N + M == L, "output length must be the sum of input lengths") };
        Vector::from_fn(|i| if i < N { self.0[i] } else { other.0[i - N] })
    }

    /// Copy of the elements `POS..POS + COUNT`
    pub fn subvector<const POS: usize, const COUNT: usize>(&self) -> Vector<T, COUNT> {
        const { assert!(POS + COUNT <= N, "range out of bounds") };
        Vector::from_fn(|i| self.0[POS + i])
    }

    /// Remove the elements `POS..POS + COUNT`
    ///
    /// ```
    /// # use embedded_iir::Vector;
    /// let v: Vector<_, 2> = Vector([1, 2, 3, 4, 5]).erase::<1, 3, 2>();
    /// assert_eq!(v, Vector([1, 5]));
    /// ```
    pub fn erase<const POS: usize, const COUNT: usize, const L: usize>(&self) -> Vector<T, L> {
        const { assert!(POS + COUNT <= N && L + COUNT == N, "range out of bounds") };
        Vector::from_fn(|i| if i < POS { self.0[i] } else { self.0[i + COUNT] })
    }

    /// Exchange the elements at `a` and `b`
    pub fn swap(&self, a: usize, b: usize) -> Self {
        let mut v = *self;
        v.0.swap(a, b);
        v
    }

    /// Remove element `i` by moving the first element into its place
    ///
    /// Returns the removed element and the remainder.
    pub fn swap_pop<const L: usize>(&self, i: usize) -> (T, Vector<T, L>) {
        const { assert!(L + 1 == N, "output must be one shorter") };
        let mut v = self.0;
        let x = swap_pop_front(&mut v, i);
        (x, Vector::from_fn(|j| v[j]))
    }

    /// Index of the minimum under the strict order `less`
    ///
    /// Ties resolve to the first occurrence. Zero for empty vectors.
    pub fn argmin(&self, less: impl FnMut(&T, &T) -> bool) -> usize {
        argmin_by(&self.0, less)
    }

    /// Number of elements satisfying `pred`
    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.0.iter().filter(|v| pred(v)).count()
    }

    /// Stable selection sort under the strict order `less`
    pub fn sort(&self, mut less: impl FnMut(&T, &T) -> bool) -> Self {
        let mut v = *self;
        for i in 0..N {
            let tail = &mut v.0[i..];
            let min = argmin_by(tail, &mut less);
            tail[..=min].rotate_right(1);
        }
        v
    }
}

/// Index of the first minimum of `slice` under the strict order `less`
///
/// Zero for an empty slice.
pub(crate) fn argmin_by<T>(slice: &[T], mut less: impl FnMut(&T, &T) -> bool) -> usize {
    (1..slice.len()).fold(0, |min, i| if less(&slice[i], &slice[min]) { i } else { min })
}

/// Remove `slice[i]` by moving the first element into its place and
/// shifting the rest down by one
///
/// The last slot is left stale.
pub(crate) fn swap_pop_front<T: Copy>(slice: &mut [T], i: usize) -> T {
    slice.swap(i, 0);
    let x = slice[0];
    slice.copy_within(1.., 0);
    x
}

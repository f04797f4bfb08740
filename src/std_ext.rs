use core::fmt;

/// Minimal version of unstable [Step](core::iter::Step) trait
/// from the Rust standard library.
///
/// This is needed for discrete [RangeSet](crate::RangeSet)s,
/// because closed ranges stored in them interact with each other
/// when the end of one is _adjacent_ the start of another.
/// I.e. we need a concept of successor values rather than just
/// equality, and that is what [Step](core::iter::Step) will
/// eventually provide once it is stabilized.
///
/// The set only ever calls `add_one` on a value that is strictly
/// below some other value, and `sub_one` on a value that is strictly
/// above some other value, so implementations need not handle the
/// extremes of their domain.
//
// TODO: Deprecate and then eventually remove once
// https://github.com/rust-lang/rust/issues/42168 is stabilized.
pub trait StepLite {
    fn add_one(&self) -> Self;
    fn sub_one(&self) -> Self;
}

macro_rules! impl_step_lite_for_integers {
    ($($t:ty),*) => {
        $(
            impl StepLite for $t {
                fn add_one(&self) -> Self {
                    self + 1
                }

                fn sub_one(&self) -> Self {
                    self - 1
                }
            }
        )*
    };
}

impl_step_lite_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Scalar values skip the surrogate block.
impl StepLite for char {
    fn add_one(&self) -> Self {
        match *self {
            '\u{D7FF}' => '\u{E000}',
            c => char::from_u32(c as u32 + 1).unwrap_or(char::MAX),
        }
    }

    fn sub_one(&self) -> Self {
        match *self {
            '\u{E000}' => '\u{D7FF}',
            c => char::from_u32((c as u32).saturating_sub(1)).unwrap_or('\0'),
        }
    }
}

/// Successor and predecessor functions defined independently of
/// the type they operate on.
///
/// This is useful as a workaround for Rust's "orphan rules",
/// which prevent you from implementing [StepLite] for `T` if `T`
/// is a foreign type. Every `T: StepLite` gets an implementation
/// for free.
pub trait StepFns<T> {
    fn add_one(start: &T) -> T;
    fn sub_one(start: &T) -> T;
}

impl<T> StepFns<T> for T
where
    T: StepLite,
{
    fn add_one(start: &T) -> T {
        start.add_one()
    }

    fn sub_one(start: &T) -> T {
        start.sub_one()
    }
}

/// The successor/predecessor strategy a discrete set navigates with.
///
/// Just a pair of function pointers, so it is `Copy` no matter
/// what `Y` is.
pub struct Steps<Y> {
    next: fn(&Y) -> Y,
    prev: fn(&Y) -> Y,
}

impl<Y> Steps<Y> {
    /// Builds a strategy from free functions.
    ///
    /// `next` and `prev` must be inverses of each other everywhere
    /// except at the extremes of the domain.
    pub fn new(next: fn(&Y) -> Y, prev: fn(&Y) -> Y) -> Self {
        Steps { next, prev }
    }

    /// Builds a strategy from a [StepFns] implementation.
    pub fn of<S: StepFns<Y>>() -> Self {
        Steps {
            next: <S as StepFns<Y>>::add_one,
            prev: <S as StepFns<Y>>::sub_one,
        }
    }

    pub fn next(&self, y: &Y) -> Y {
        (self.next)(y)
    }

    pub fn prev(&self, y: &Y) -> Y {
        (self.prev)(y)
    }
}

impl<Y: StepLite> Default for Steps<Y> {
    fn default() -> Self {
        Self::of::<Y>()
    }
}

impl<Y> Clone for Steps<Y> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Y> Copy for Steps<Y> {}

impl<Y> fmt::Debug for Steps<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Steps").finish_non_exhaustive()
    }
}

/// How a [RangeSet](crate::RangeSet) decides whether two ranges
/// should be fused.
///
/// - `Continuous`: only ranges that share at least one point are fused.
///   `[1, 3]` and `[4, 6]` stay apart.
/// - `Discrete`: ranges separated by exactly one successor step are
///   fused as well, so `[1, 3]` and `[4, 6]` become `[1, 6]`.
pub enum Mode<Y> {
    Continuous,
    Discrete(Steps<Y>),
}

impl<Y> Mode<Y> {
    /// Discrete mode navigating with `Y`'s own [StepLite] implementation.
    pub fn discrete() -> Self
    where
        Y: StepLite,
    {
        Mode::Discrete(Steps::default())
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self, Mode::Discrete(_))
    }

    pub fn steps(&self) -> Option<&Steps<Y>> {
        match self {
            Mode::Continuous => None,
            Mode::Discrete(steps) => Some(steps),
        }
    }
}

impl<Y> Clone for Mode<Y> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Y> Copy for Mode<Y> {}

impl<Y> fmt::Debug for Mode<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Continuous => f.write_str("Continuous"),
            Mode::Discrete(_) => f.write_str("Discrete"),
        }
    }
}

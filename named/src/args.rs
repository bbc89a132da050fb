use crate::{tag::Tag, tagged::Tagged};
use core::{
    fmt::{self, Debug},
    marker::PhantomData,
};

/// Builds a payload from an ordered tuple of arguments.
///
/// - `()` builds `T::default()`;
/// - `(a,)` converts `a` with `Into`;
/// - `(a, b, ...)` up to six elements goes through `From<(A, B, ...)>`.
pub trait FromArgs<A>: Sized {
    fn from_args(args: A) -> Self;
}

impl<T: Default> FromArgs<()> for T {
    #[inline(always)]
    fn from_args((): ()) -> Self {
        T::default()
    }
}

impl<T, A> FromArgs<(A,)> for T
where
    A: Into<T>,
{
    #[inline(always)]
    fn from_args((a,): (A,)) -> Self {
        a.into()
    }
}

macro_rules! impl_from_args {
    ($($A:ident),+) => {
        impl<T, $($A),+> FromArgs<($($A,)+)> for T
        where
            T: From<($($A,)+)>,
        {
            #[inline(always)]
            fn from_args(args: ($($A,)+)) -> Self {
                T::from(args)
            }
        }
    };
}

impl_from_args!(A, B);
impl_from_args!(A, B, C);
impl_from_args!(A, B, C, D);
impl_from_args!(A, B, C, D, E);
impl_from_args!(A, B, C, D, E, F);

/// Arguments of a call-style construction, waiting for the payload type.
///
/// Produced by [`Helper::call`](crate::tag::Helper::call); turned into a
/// [`Tagged`] once the receiving parameter is known, see
/// [`Argument`](crate::argument::Argument).
pub struct Deferred<K, A> {
    args: A,
    tag: PhantomData<fn() -> K>,
}

impl<K, A> Deferred<K, A> {
    #[inline(always)]
    pub const fn new(args: A) -> Self {
        Deferred {
            args,
            tag: PhantomData,
        }
    }

    pub fn args(&self) -> &A {
        &self.args
    }

    pub fn into_args(self) -> A {
        self.args
    }

    /// Constructs the payload `P` from the pending arguments.
    pub fn build<P>(self) -> Tagged<K, P>
    where
        P: FromArgs<A>,
    {
        Tagged::new(P::from_args(self.args))
    }
}

impl<K, A: Clone> Clone for Deferred<K, A> {
    fn clone(&self) -> Self {
        Deferred::new(self.args.clone())
    }
}

impl<K, A: Copy> Copy for Deferred<K, A> {}

impl<K: Tag, A: Debug> Debug for Deferred<K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", K::NAME, self.args)
    }
}

use crate::{
    args::{Deferred, FromArgs},
    tag::Tag,
    tagged::Tagged,
};

/// Marks the values that were produced for the tag `K`.
pub trait HasTag<K> {}

impl<K, T> HasTag<K> for Tagged<K, T> {}
impl<K, A> HasTag<K> for Deferred<K, A> {}

/// Anything a tag helper produces that can fill a parameter `Tagged<K, P>`.
///
/// - `Tagged<K, U>` when `U: Into<P>` (including `U = P`);
/// - `Deferred<K, A>` when `P` can be built from the argument tuple `A`.
///
/// A value tagged with another tag never implements `Argument<K, _>`.
///
/// ```
/// use named_param::argument::Argument;
///
/// mod arg {
///     named_param::named_parameter! { pub n; }
/// }
///
/// fn twice(n: impl Argument<arg::NTag, i64>) -> i64 {
///     n.into_tagged().into_value() * 2
/// }
///
/// assert_eq!(twice(arg::n.set(21i64)), 42);
/// assert_eq!(twice(arg::n.set(21u8)), 42);
/// assert_eq!(twice(arg::n.call(())), 0);
/// ```
pub trait Argument<K, P>: HasTag<K> {
    fn into_tagged(self) -> Tagged<K, P>;
}

impl<K, U, P> Argument<K, P> for Tagged<K, U>
where
    U: Into<P>,
{
    #[inline(always)]
    fn into_tagged(self) -> Tagged<K, P> {
        self.convert()
    }
}

impl<K, A, P> Argument<K, P> for Deferred<K, A>
where
    K: Tag,
    P: FromArgs<A>,
{
    fn into_tagged(self) -> Tagged<K, P> {
        log::trace!("deferred construction of {}", K::NAME);
        self.build()
    }
}

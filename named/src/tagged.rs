use crate::{error::ArgumentError, tag::Tag};
use core::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Deref,
};

/// A value tagged with the named parameter `K` it was passed as.
///
/// A plain payload `T` is owned by the wrapper. A payload declared as `&'a U`
/// or `&'a mut U` makes the wrapper a non-owning handle to a caller's `U`; the
/// referent must outlive the wrapper, as for any borrow.
///
/// The tag is part of the type, so `Tagged<A, T>` and `Tagged<B, T>` never
/// convert into each other.
#[repr(transparent)]
pub struct Tagged<K, T> {
    value: T,
    tag: PhantomData<fn() -> K>,
}

impl<K, T> Tagged<K, T> {
    /// There is no `From<T>`: a bare value only reaches a parameter through a
    /// tag helper or this constructor.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Tagged {
            value,
            tag: PhantomData,
        }
    }

    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Address of the stored payload.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        core::ptr::addr_of!(self.value)
    }

    /// Converts the payload while keeping the tag.
    pub fn convert<U>(self) -> Tagged<K, U>
    where
        T: Into<U>,
    {
        Tagged::new(self.value.into())
    }

    pub fn map<U, F>(self, f: F) -> Tagged<K, U>
    where
        F: FnOnce(T) -> U,
    {
        Tagged::new(f(self.value))
    }
}

impl<K: Tag, T> Tagged<K, T> {
    pub fn name(&self) -> &'static str {
        K::NAME
    }

    /// Fallible counterpart of [`Tagged::convert`] for narrowing conversions.
    pub fn try_convert<U>(self) -> Result<Tagged<K, U>, ArgumentError<U::Error>>
    where
        U: TryFrom<T>,
    {
        log::trace!("try_convert {}", K::NAME);
        U::try_from(self.value)
            .map(Tagged::new)
            .map_err(|error| ArgumentError::Conversion {
                name: K::NAME,
                error,
            })
    }
}

impl<'a, K, T: ?Sized> Tagged<K, &'a T> {
    /// The referent. Only shared access is possible.
    #[inline(always)]
    pub fn get(&self) -> &'a T {
        self.value
    }

    pub fn cloned(&self) -> Tagged<K, T>
    where
        T: Clone,
    {
        Tagged::new(T::clone(self.value))
    }
}

impl<'a, K, T: ?Sized> Tagged<K, &'a mut T> {
    /// Mutable handle to the referent; writes are visible to the caller's
    /// original object.
    #[inline(always)]
    pub fn get(&mut self) -> &mut T {
        &mut *self.value
    }

    #[inline(always)]
    pub fn into_mut(self) -> &'a mut T {
        self.value
    }

    pub fn into_shared(self) -> Tagged<K, &'a T> {
        Tagged::new(self.value)
    }

    pub fn cloned(&self) -> Tagged<K, T>
    where
        T: Clone,
    {
        Tagged::new(T::clone(&*self.value))
    }
}

impl<K, T> Deref for Tagged<K, T> {
    type Target = T;
    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<K, T> AsRef<T> for Tagged<K, T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<K, T: Default> Default for Tagged<K, T> {
    fn default() -> Self {
        Tagged::new(T::default())
    }
}

impl<K, T: Clone> Clone for Tagged<K, T> {
    fn clone(&self) -> Self {
        Tagged::new(self.value.clone())
    }
}

impl<K, T: Copy> Copy for Tagged<K, T> {}

impl<K, T: PartialEq> PartialEq for Tagged<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K, T: Eq> Eq for Tagged<K, T> {}

impl<K, T: PartialOrd> PartialOrd for Tagged<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K, T: Ord> Ord for Tagged<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K, T: Hash> Hash for Tagged<K, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<K: Tag, T: Debug> Debug for Tagged<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", K::NAME, self.value)
    }
}

impl<K: Tag, T: Display> Display for Tagged<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", K::NAME, self.value)
    }
}

#[cfg(feature = "serde")]
mod serialization {
    use super::Tagged;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<K, T: Serialize> Serialize for Tagged<K, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.value().serialize(serializer)
        }
    }

    impl<'de, K, T: Deserialize<'de>> Deserialize<'de> for Tagged<K, T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            T::deserialize(deserializer).map(Tagged::new)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::{String, ToString};

    mod arg {
        crate::named_parameter! {
            pub x;
            pub label;
        }
    }

    use arg::{label_, x_};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Widget {
        x: i32,
    }

    #[test]
    fn value_round_trip() {
        let source = String::from("abcd");
        let tagged: label_<String> = arg::label.set(source.clone());
        assert_eq!(tagged.value(), &source);

        let mut extracted = tagged.into_value();
        extracted.push('e');
        assert_eq!(extracted, "abcde");
        assert_eq!(source, "abcd");
    }

    #[test]
    fn default_payload() {
        let n: x_<i32> = Default::default();
        assert_eq!(*n.value(), 0);
        let w: x_<Widget> = Default::default();
        assert_eq!(w.x, 0);
    }

    #[test]
    fn shared_reference_reads_the_referent() {
        let n = 100;
        let tagged: x_<&i32> = arg::x.set(&n);
        assert_eq!(*tagged.get(), 100);
        assert_eq!(tagged.cloned(), arg::x.set(100));
        assert!(core::ptr::eq(tagged.get(), &n));
    }

    #[test]
    fn mutable_reference_passes_through() {
        let mut n = 100;
        {
            let mut tagged: x_<&mut i32> = arg::x.set(&mut n);
            *tagged.get() += 1;
        }
        assert_eq!(n, 101);

        let mut w = Widget { x: 100 };
        let tagged = arg::x.set(&mut w);
        tagged.into_mut().x += 1;
        assert_eq!(w.x, 101);
    }

    #[test]
    fn mutable_reference_downgrades_to_shared() {
        let mut w = Widget { x: 7 };
        let shared: x_<&Widget> = arg::x.set(&mut w).into_shared();
        assert_eq!(shared.get().x, 7);
        assert_eq!(shared.cloned().into_value(), Widget { x: 7 });
    }

    #[test]
    fn member_access_through_deref() {
        let w: x_<Widget> = arg::x.set(Widget { x: 3 });
        assert_eq!(w.x, 3);
        assert_eq!(w.as_ref().x, 3);
    }

    #[test]
    fn as_ptr_points_at_storage() {
        let w: x_<Widget> = arg::x.set(Widget { x: 3 });
        assert!(core::ptr::eq(w.as_ptr(), w.value()));
    }

    #[test]
    fn convert_keeps_tag() {
        let narrow: x_<u8> = arg::x.set(100u8);
        let wide: x_<i32> = narrow.convert();
        assert_eq!(*wide, 100);
        assert_eq!(wide.map(|n| n * 2).into_value(), 200);
    }

    #[test]
    fn try_convert_reports_tag_name() {
        let big: x_<i64> = arg::x.set(300);
        let err = big.try_convert::<u8>().unwrap_err();
        match err {
            ArgumentError::Conversion { name, .. } => assert_eq!(name, "x"),
        }
        let small: x_<i64> = arg::x.set(30);
        assert_eq!(small.try_convert::<u8>().unwrap().into_value(), 30u8);
    }

    #[test]
    fn formatting_includes_name() {
        let n: x_<i32> = arg::x.set(5);
        assert_eq!(format!("{:?}", n), "x: 5");
        assert_eq!(n.to_string(), "x = 5");
        assert_eq!(n.name(), "x");
    }

    #[test]
    fn comparisons_use_payload() {
        let a: x_<i32> = arg::x.set(1);
        let b: x_<i32> = arg::x.set(2);
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_ne!(a, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_is_transparent() {
        let n: x_<u32> = arg::x.set(42);
        assert_eq!(serde_json::to_string(&n).unwrap(), "42");
        let back: x_<u32> = serde_json::from_str("42").unwrap();
        assert_eq!(back, n);
    }
}

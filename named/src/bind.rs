use crate::{
    argument::{Argument, HasTag},
    tag::Tag,
    tagged::Tagged,
};

/// Position markers used as the index of [`Pluck`].
pub struct At0;
pub struct At1;
pub struct At2;
pub struct At3;
pub struct At4;
pub struct At5;

pub type PluckValueOf<S, K, I> = <S as Pluck<K, I>>::Value;
pub type PluckRestOf<S, K, I> = <S as Pluck<K, I>>::Rest;

/// Removes the element tagged `K` from a tuple of arguments.
///
/// `I` is the position of that element and is inferred by the compiler. It is
/// unique as long as `K` occurs exactly once; a tuple holding `K` twice has no
/// single index and is rejected at compile time.
pub trait Pluck<K, I> {
    type Value: HasTag<K>;
    type Rest;
    fn pluck(self) -> (Self::Value, Self::Rest);
}

macro_rules! impl_pluck {
    ($At:ident => ($($before:ident),*) $Target:ident ($($after:ident),*)) => {
        impl<K, $($before,)* $Target, $($after,)*> Pluck<K, $At> for ($($before,)* $Target, $($after,)*)
        where
            $Target: HasTag<K>,
        {
            type Value = $Target;
            type Rest = ($($before,)* $($after,)*);

            #[inline(always)]
            #[allow(non_snake_case)]
            fn pluck(self) -> (Self::Value, Self::Rest) {
                let ($($before,)* $Target, $($after,)*) = self;
                ($Target, ($($before,)* $($after,)*))
            }
        }
    };
}

impl_pluck!(At0 => () A ());

impl_pluck!(At0 => () A (B));
impl_pluck!(At1 => (A) B ());

impl_pluck!(At0 => () A (B, C));
impl_pluck!(At1 => (A) B (C));
impl_pluck!(At2 => (A, B) C ());

impl_pluck!(At0 => () A (B, C, D));
impl_pluck!(At1 => (A) B (C, D));
impl_pluck!(At2 => (A, B) C (D));
impl_pluck!(At3 => (A, B, C) D ());

impl_pluck!(At0 => () A (B, C, D, E));
impl_pluck!(At1 => (A) B (C, D, E));
impl_pluck!(At2 => (A, B) C (D, E));
impl_pluck!(At3 => (A, B, C) D (E));
impl_pluck!(At4 => (A, B, C, D) E ());

impl_pluck!(At0 => () A (B, C, D, E, F));
impl_pluck!(At1 => (A) B (C, D, E, F));
impl_pluck!(At2 => (A, B) C (D, E, F));
impl_pluck!(At3 => (A, B, C) D (E, F));
impl_pluck!(At4 => (A, B, C, D) E (F));
impl_pluck!(At5 => (A, B, C, D, E) F ());

/// Rebuilds the signature `Sig`, a tuple of `Tagged` parameters in declaration
/// order, from a tuple of arguments given in any order.
///
/// Every parameter takes exactly one argument with its tag, converted through
/// [`Argument`]. Arguments left over, missing or repeated fail to compile.
///
/// ```
/// use named_param::bind::Bind;
///
/// mod arg {
///     named_param::named_parameter! { pub width; pub height; }
/// }
///
/// fn area<A, I>(args: A) -> u32
/// where
///     A: Bind<(arg::width_<u32>, arg::height_<u32>), I>,
/// {
///     let (w, h) = args.bind();
///     w.into_value() * h.into_value()
/// }
///
/// assert_eq!(area((arg::width.set(3u32), arg::height.set(4u32))), 12);
/// assert_eq!(area((arg::height.set(4u32), arg::width.set(3u32))), 12);
/// ```
///
/// A missing argument:
///
/// ```compile_fail
/// # use named_param::bind::Bind;
/// # mod arg { named_param::named_parameter! { pub width; pub height; } }
/// # fn area<A, I>(args: A) -> u32 where A: Bind<(arg::width_<u32>, arg::height_<u32>), I> {
/// #     let (w, h) = args.bind();
/// #     w.into_value() * h.into_value()
/// # }
/// area((arg::width.set(3u32),));
/// ```
///
/// A repeated argument:
///
/// ```compile_fail
/// # use named_param::bind::Bind;
/// # mod arg { named_param::named_parameter! { pub width; pub height; } }
/// # fn area<A, I>(args: A) -> u32 where A: Bind<(arg::width_<u32>, arg::height_<u32>), I> {
/// #     let (w, h) = args.bind();
/// #     w.into_value() * h.into_value()
/// # }
/// area((arg::width.set(3u32), arg::width.set(5u32), arg::height.set(4u32)));
/// ```
///
/// An argument the signature does not declare:
///
/// ```compile_fail
/// # use named_param::bind::Bind;
/// # mod arg { named_param::named_parameter! { pub width; pub height; pub depth; } }
/// # fn area<A, I>(args: A) -> u32 where A: Bind<(arg::width_<u32>, arg::height_<u32>), I> {
/// #     let (w, h) = args.bind();
/// #     w.into_value() * h.into_value()
/// # }
/// area((arg::width.set(3u32), arg::height.set(4u32), arg::depth.set(5u32)));
/// ```
pub trait Bind<Sig, I> {
    fn bind(self) -> Sig;
}

impl Bind<(), ()> for () {
    #[inline(always)]
    fn bind(self) {}
}

macro_rules! impl_bind {
    ($K0:ident $P0:ident $(, $K:ident $P:ident)*) => {
        impl<S, I, R, $K0, $P0 $(, $K, $P)*> Bind<(Tagged<$K0, $P0>, $(Tagged<$K, $P>,)*), (I, R)> for S
        where
            $K0: Tag,
            S: Pluck<$K0, I>,
            PluckValueOf<S, $K0, I>: Argument<$K0, $P0>,
            PluckRestOf<S, $K0, I>: Bind<($(Tagged<$K, $P>,)*), R>,
        {
            #[allow(non_snake_case)]
            fn bind(self) -> (Tagged<$K0, $P0>, $(Tagged<$K, $P>,)*) {
                log::trace!("bind {}", <$K0 as Tag>::NAME);
                let (head, rest) = <S as Pluck<$K0, I>>::pluck(self);
                let ($($K,)*) =
                    <PluckRestOf<S, $K0, I> as Bind<($(Tagged<$K, $P>,)*), R>>::bind(rest);
                (Argument::<$K0, $P0>::into_tagged(head), $($K,)*)
            }
        }
    };
}

impl_bind!(K0 P0);
impl_bind!(K0 P0, K1 P1);
impl_bind!(K0 P0, K1 P1, K2 P2);
impl_bind!(K0 P0, K1 P1, K2 P2, K3 P3);
impl_bind!(K0 P0, K1 P1, K2 P2, K3 P3, K4 P4);
impl_bind!(K0 P0, K1 P1, K2 P2, K3 P3, K4 P4, K5 P5);

#[cfg(test)]
mod tests {
    use super::*;
    use std::{string::String, vec::Vec};

    mod arg {
        crate::named_parameter! {
            pub a;
            pub b;
            pub c;
            pub d;
            pub e;
            pub f;
        }
    }

    use arg::{a_, b_, c_, d_, e_, f_, ATag, BTag, CTag};

    fn abc<S, I>(args: S) -> (i32, i32, i32)
    where
        S: Bind<(a_<i32>, b_<i32>, c_<i32>), I>,
    {
        let (a, b, c) = args.bind();
        (a.into_value(), b.into_value(), c.into_value())
    }

    #[test]
    fn pluck_keeps_remaining_order() {
        let args = (arg::a.set(1), arg::b.set(2), arg::c.set(3));
        let (picked, rest): (b_<i32>, (a_<i32>, c_<i32>)) = Pluck::<BTag, At1>::pluck(args);
        assert_eq!(*picked, 2);
        assert_eq!((*rest.0, *rest.1), (1, 3));
    }

    #[test]
    fn pluck_infers_position() {
        fn take<S: Pluck<CTag, I>, I>(s: S) -> (S::Value, S::Rest) {
            s.pluck()
        }
        let (picked, rest) = take((arg::a.set('a'), arg::c.set('c')));
        assert_eq!(*picked, 'c');
        assert_eq!(*rest.0, 'a');
    }

    #[test]
    fn every_order_binds_the_same() {
        let expected = (1, 2, 3);
        assert_eq!(abc((arg::a.set(1), arg::b.set(2), arg::c.set(3))), expected);
        assert_eq!(abc((arg::a.set(1), arg::c.set(3), arg::b.set(2))), expected);
        assert_eq!(abc((arg::b.set(2), arg::a.set(1), arg::c.set(3))), expected);
        assert_eq!(abc((arg::b.set(2), arg::c.set(3), arg::a.set(1))), expected);
        assert_eq!(abc((arg::c.set(3), arg::a.set(1), arg::b.set(2))), expected);
        assert_eq!(abc((arg::c.set(3), arg::b.set(2), arg::a.set(1))), expected);
    }

    #[test]
    fn mixed_construction_styles() {
        assert_eq!(
            abc((arg::c.call((3u8,)), arg::a.set(1i16), arg::b.call(()))),
            (1, 0, 3)
        );
    }

    #[test]
    fn empty_signature() {
        let () = <() as Bind<(), ()>>::bind(());
    }

    #[test]
    fn single_parameter() {
        fn one<S, I>(args: S) -> String
        where
            S: Bind<(a_<String>,), I>,
        {
            let (a,) = args.bind();
            a.into_value()
        }
        assert_eq!(one((arg::a.set(String::from("hi")),)), "hi");
        assert_eq!(one((arg::a.call(("hi",)),)), "hi");
    }

    #[test]
    fn six_parameters() {
        fn six<S, I>(args: S) -> Vec<u32>
        where
            S: Bind<(a_<u32>, b_<u32>, c_<u32>, d_<u32>, e_<u32>, f_<u32>), I>,
        {
            let (a, b, c, d, e, f) = args.bind();
            vec![*a, *b, *c, *d, *e, *f]
        }
        let got = six((
            arg::f.set(6u32),
            arg::e.set(5u32),
            arg::d.set(4u32),
            arg::c.set(3u32),
            arg::b.set(2u32),
            arg::a.set(1u32),
        ));
        assert_eq!(got, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn references_bind_through() {
        fn incr<'x, S, I>(args: S)
        where
            S: Bind<(a_<&'x mut i32>, b_<i32>), I>,
        {
            let (mut a, b) = args.bind();
            *a.get() += *b;
        }
        let mut n = 100;
        incr((arg::b.set(1), arg::a.set(&mut n)));
        assert_eq!(n, 101);
    }

    #[test]
    fn tag_types_are_used() {
        fn tag_name<K: Tag, T>(_: &Tagged<K, T>) -> &'static str {
            K::NAME
        }
        let t: Tagged<ATag, ()> = arg::a.set(());
        assert_eq!(tag_name(&t), "a");
    }
}

// tag.rs ---

// Copyright (C) 2022 Hussein Ait-Lahcen

// Author: Hussein Ait-Lahcen <hussein.aitlahcen@gmail.com>

// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// Except as contained in this notice, the name(s) of the above copyright
// holders shall not be used in advertising or otherwise to promote the sale,
// use or other dealings in this Software without prior written authorization.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.  IN NO EVENT SHALL
// THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

use crate::{args::Deferred, tagged::Tagged};
use core::{fmt, marker::PhantomData};

/// Compile-time identity of a named parameter.
///
/// Implementors are usually uninhabited enums generated by
/// [`named_parameter!`](crate::named_parameter); they only exist at the type
/// level and are never instantiated.
pub trait Tag: 'static {
    /// The identifier the tag was declared with.
    const NAME: &'static str;
}

/// Factory for the arguments of a single tag.
///
/// A helper is zero-sized and stateless: every call produces a fresh wrapper
/// and nothing is shared between call sites.
pub struct Helper<K>(PhantomData<fn() -> K>);

impl<K> Helper<K> {
    #[inline(always)]
    pub const fn new() -> Self {
        Helper(PhantomData)
    }

    /// Assignment-style construction, `x = value`.
    ///
    /// The argument is moved into the wrapper. Passing `&v` or `&mut v`
    /// produces a reference-semantics wrapper bound to `v`.
    #[inline(always)]
    pub fn set<T>(&self, value: T) -> Tagged<K, T> {
        Tagged::new(value)
    }

    /// Call-style construction, `x(a, b, ...)`.
    ///
    /// The arguments are kept as an ordered tuple until the receiving
    /// parameter fixes the payload type, which is then built from them.
    #[inline(always)]
    pub fn call<A>(&self, args: A) -> Deferred<K, A> {
        Deferred::new(args)
    }
}

impl<K: Tag> Helper<K> {
    pub fn name(&self) -> &'static str {
        K::NAME
    }
}

impl<K> Clone for Helper<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Helper<K> {}

impl<K> Default for Helper<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Tag> fmt::Debug for Helper<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Helper({})", K::NAME)
    }
}

/// Declares named parameters.
///
/// For every identifier `name` this generates:
/// - `enum NameTag {}`, the tag type, implementing [`Tag`];
/// - `const name: Helper<NameTag>`, used as `name.set(v)` or `name.call((a, b))`;
/// - `type name_<T> = Tagged<NameTag, T>`, used in parameter lists.
///
/// The helper is a constant, so it takes part in pattern resolution: refer to
/// it through its module path (`arg::x`) rather than importing it next to
/// bindings that share its name.
///
/// ```
/// mod arg {
///     named_param::named_parameter! {
///         pub x;
///         pub y;
///     }
/// }
///
/// fn area(width: arg::x_<u32>, height: arg::y_<u32>) -> u32 {
///     *width.value() * *height.value()
/// }
///
/// assert_eq!(area(arg::x.set(3), arg::y.set(4)), 12);
/// assert_eq!(arg::x.name(), "x");
/// ```
#[macro_export]
macro_rules! named_parameter {
    ($($vis:vis $name:ident);* $(;)?) => {
        $(
            $crate::__private::paste! {
                #[allow(dead_code)]
                $vis enum [<$name:camel Tag>] {}

                impl $crate::tag::Tag for [<$name:camel Tag>] {
                    const NAME: &'static str = stringify!($name);
                }

                #[allow(non_upper_case_globals, dead_code)]
                $vis const $name: $crate::tag::Helper<[<$name:camel Tag>]> =
                    $crate::tag::Helper::new();

                #[allow(non_camel_case_types, dead_code)]
                $vis type [<$name _>]<T> = $crate::tagged::Tagged<[<$name:camel Tag>], T>;
            }
        )*
    };
}

// lib.rs ---

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

//! Named parameters checked by the type system.
//!
//! ```
//! use named_param::bind::Bind;
//!
//! mod arg {
//!     named_param::named_parameter! {
//!         pub x;
//!         pub y;
//!     }
//! }
//!
//! fn distance<A, I>(args: A) -> f64
//! where
//!     A: Bind<(arg::x_<f64>, arg::y_<f64>), I>,
//! {
//!     let (x, y) = args.bind();
//!     x.hypot(*y)
//! }
//!
//! assert_eq!(distance((arg::x.set(3.0), arg::y.set(4.0))), 5.0);
//! assert_eq!(distance((arg::y.set(4.0), arg::x.set(3.0))), 5.0);
//! ```
//!
//! Tags with the same payload type do not mix:
//!
//! ```compile_fail
//! mod arg {
//!     named_param::named_parameter! { pub x; pub y; }
//! }
//! fn only_x(_: arg::x_<i32>) {}
//! only_x(arg::y.set(1));
//! ```
//!
//! A bare value is not an argument:
//!
//! ```compile_fail
//! mod arg {
//!     named_param::named_parameter! { pub x; }
//! }
//! fn only_x(_: arg::x_<i32>) {}
//! only_x(1);
//! ```
//!
//! A shared reference never hands out mutable access:
//!
//! ```compile_fail
//! mod arg {
//!     named_param::named_parameter! { pub x; }
//! }
//! fn bump(mut n: arg::x_<&i32>) {
//!     *n.get() += 1;
//! }
//! let n = 100;
//! bump(arg::x.set(&n));
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

pub mod args;
pub mod argument;
pub mod bind;
pub mod error;
pub mod tag;
pub mod tagged;

pub use crate::{
    args::{Deferred, FromArgs},
    argument::Argument,
    bind::Bind,
    error::ArgumentError,
    tag::{Helper, Tag},
    tagged::Tagged,
};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}

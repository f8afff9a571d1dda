//! Named element access (`v.x`, `v.y`, `v.z`, `v.w`) for vectors with 2 to 4 dimensions.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
#[derive(Debug)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
#[derive(Debug)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
#[derive(Debug)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! views {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: the view is `repr(C)` with one `T` field per element followed by a
                    // ZST, so it has the same layout as the underlying array.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see `deref`.
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views!(2 => XY, 3 => XYZ, 4 => XYZW);

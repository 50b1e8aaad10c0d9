// ============================================================================
// This code is part of Rusty-GAP.
// ----------------------------------------------------------------------------
// MIT License
//
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

macro_rules! impl_write_min {
    ($name: ident, $atomic: ty, $ty: ty) => {
        /// tries to write b to a atomically while b is smaller than a.
        /// returns true if successful and false otherwise.
        #[inline(always)]
        pub fn $name(a: &$atomic, b: $ty) -> bool {
            let mut c = a.load(Ordering::Relaxed);
            while b < c {
                match a.compare_exchange_weak(
                    c,
                    b,
                    Ordering::Relaxed,
                    Ordering::Relaxed
                ) {
                    Ok(_) => { return true; },
                    Err(new) => c = new,
                }
            }
            false
        }
    }
}

impl_write_min!(write_min, AtomicU32, u32);
impl_write_min!(write_min_usize, AtomicUsize, usize);

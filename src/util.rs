// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Small helpers shared by the scaling solvers.

use crate::num::traits::{PrimInt, Signed};

use std::ops::{Deref, DerefMut};

/// Return the largest power of two that is at most `n`.
///
/// For `n <= 2` the value itself is returned.
pub fn lower_bound_power2<F>(n: F) -> F
where
    F: PrimInt + Signed,
{
    let two = F::one() + F::one();
    if n <= two {
        return n;
    }
    let mut n = n;
    while n != n & -n {
        n = n - (n & -n);
    }
    n
}

/// A guard that owns some state and runs a cleanup on every exit path.
///
/// The guarded state is accessible through `Deref`/`DerefMut` for the
/// lifetime of the guard. The cleanup runs when the guard is dropped,
/// on normal scope exit as well as during unwinding.
pub struct ScopeGuard<T, F>
where
    F: FnOnce(&mut T),
{
    inner: Option<(T, F)>,
}

/// Create a [`ScopeGuard`] over `value` with the given cleanup.
pub fn guard<T, F>(value: T, cleanup: F) -> ScopeGuard<T, F>
where
    F: FnOnce(&mut T),
{
    ScopeGuard {
        inner: Some((value, cleanup)),
    }
}

impl<T, F> Deref for ScopeGuard<T, F>
where
    F: FnOnce(&mut T),
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner.as_ref().unwrap().0
    }
}

impl<T, F> DerefMut for ScopeGuard<T, F>
where
    F: FnOnce(&mut T),
{
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut().unwrap().0
    }
}

impl<T, F> Drop for ScopeGuard<T, F>
where
    F: FnOnce(&mut T),
{
    fn drop(&mut self) {
        if let Some((mut value, cleanup)) = self.inner.take() {
            cleanup(&mut value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{guard, lower_bound_power2};

    #[test]
    fn test_lower_bound_power2() {
        for (n, p) in [(0, 0), (1, 1), (2, 2), (3, 2), (4, 4), (5, 4), (7, 4), (8, 8), (1023, 512)] {
            assert_eq!(lower_bound_power2(n as i64), p);
        }
    }

    #[test]
    fn test_guard_runs_on_exit() {
        let mut hit = false;
        {
            let mut g = guard(&mut hit, |h| **h = true);
            assert!(!**g);
            **g = false;
        }
        assert!(hit);
    }

    #[test]
    fn test_guard_runs_on_unwind() {
        use std::panic::{catch_unwind, AssertUnwindSafe};
        use std::sync::atomic::{AtomicBool, Ordering};

        let hit = AtomicBool::new(false);
        let res = catch_unwind(AssertUnwindSafe(|| {
            let _g = guard((), |_| hit.store(true, Ordering::SeqCst));
            panic!("boom");
        }));
        assert!(res.is_err());
        assert!(hit.load(Ordering::SeqCst));
    }
}

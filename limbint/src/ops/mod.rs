//! Operator kernels and their `std::ops` wiring.
//!
//! Every kernel takes its operands by reference and returns a freshly
//! allocated result; the owned/borrowed operator variants all forward to it.

/// Implement a binary operator (all owned/borrowed combinations plus the
/// compound-assignment form) on top of a `fn(&BigInt<W>, &BigInt<W>) -> BigInt<W>`.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $kernel:path) => {
        impl<W: $crate::limb::Limb> std::ops::$imp<&$crate::BigInt<W>> for &$crate::BigInt<W> {
            type Output = $crate::BigInt<W>;

            #[inline]
            fn $method(self, rhs: &$crate::BigInt<W>) -> $crate::BigInt<W> {
                $kernel(self, rhs)
            }
        }

        impl<W: $crate::limb::Limb> std::ops::$imp<$crate::BigInt<W>> for $crate::BigInt<W> {
            type Output = $crate::BigInt<W>;

            #[inline]
            fn $method(self, rhs: $crate::BigInt<W>) -> $crate::BigInt<W> {
                $kernel(&self, &rhs)
            }
        }

        impl<W: $crate::limb::Limb> std::ops::$imp<&$crate::BigInt<W>> for $crate::BigInt<W> {
            type Output = $crate::BigInt<W>;

            #[inline]
            fn $method(self, rhs: &$crate::BigInt<W>) -> $crate::BigInt<W> {
                $kernel(&self, rhs)
            }
        }

        impl<W: $crate::limb::Limb> std::ops::$imp<$crate::BigInt<W>> for &$crate::BigInt<W> {
            type Output = $crate::BigInt<W>;

            #[inline]
            fn $method(self, rhs: $crate::BigInt<W>) -> $crate::BigInt<W> {
                $kernel(self, &rhs)
            }
        }

        impl<W: $crate::limb::Limb> std::ops::$assign_imp<&$crate::BigInt<W>> for $crate::BigInt<W> {
            #[inline]
            fn $assign_method(&mut self, rhs: &$crate::BigInt<W>) {
                *self = $kernel(self, rhs);
            }
        }

        impl<W: $crate::limb::Limb> std::ops::$assign_imp<$crate::BigInt<W>> for $crate::BigInt<W> {
            #[inline]
            fn $assign_method(&mut self, rhs: $crate::BigInt<W>) {
                *self = $kernel(self, &rhs);
            }
        }
    };
}

/// Implement a shift operator taking a bit count for owned and borrowed
/// receivers, plus the compound-assignment form.
macro_rules! forward_shift {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $kernel:path) => {
        impl<W: $crate::limb::Limb> std::ops::$imp<usize> for &$crate::BigInt<W> {
            type Output = $crate::BigInt<W>;

            #[inline]
            fn $method(self, bits: usize) -> $crate::BigInt<W> {
                $kernel(self, bits)
            }
        }

        impl<W: $crate::limb::Limb> std::ops::$imp<usize> for $crate::BigInt<W> {
            type Output = $crate::BigInt<W>;

            #[inline]
            fn $method(self, bits: usize) -> $crate::BigInt<W> {
                $kernel(&self, bits)
            }
        }

        impl<W: $crate::limb::Limb> std::ops::$assign_imp<usize> for $crate::BigInt<W> {
            #[inline]
            fn $assign_method(&mut self, bits: usize) {
                *self = $kernel(self, bits);
            }
        }
    };
}

mod add;
mod bitwise;
mod cmp;
mod div;
mod mul;
mod pow;

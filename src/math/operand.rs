/// Right-hand side of an element-wise operation.
///
/// A scalar is applied to every component (or cell); a value of the same
/// kind is applied component by component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T> {
    Scalar(f64),
    Value(T),
}

/// Implements the compound-assignment operators for a fixed-size vector
/// type, both against another vector (component-wise) and against an `f64`
/// scalar.
///
/// The by-value `Add`/`Sub`/`Mul`/`Div` operators are left out: their method
/// names would shadow the in-place chaining methods whenever a caller has the
/// trait in scope.
macro_rules! impl_elementwise_ops {
    (@op $ty:ident, $op_assign:ident, $method_assign:ident, $sym:tt, $($field:ident),+) => {
        impl ::std::ops::$op_assign for $ty {
            fn $method_assign(&mut self, rhs: $ty) {
                $(self.$field $sym rhs.$field;)+
            }
        }

        impl ::std::ops::$op_assign<f64> for $ty {
            fn $method_assign(&mut self, rhs: f64) {
                $(self.$field $sym rhs;)+
            }
        }
    };
    ($ty:ident { $($field:ident),+ }) => {
        impl_elementwise_ops!(@op $ty, AddAssign, add_assign, +=, $($field),+);
        impl_elementwise_ops!(@op $ty, SubAssign, sub_assign, -=, $($field),+);
        impl_elementwise_ops!(@op $ty, MulAssign, mul_assign, *=, $($field),+);
        impl_elementwise_ops!(@op $ty, DivAssign, div_assign, /=, $($field),+);

        impl ::std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }

        impl From<f64> for $crate::math::Operand<$ty> {
            fn from(value: f64) -> Self {
                $crate::math::Operand::Scalar(value)
            }
        }

        impl From<$ty> for $crate::math::Operand<$ty> {
            fn from(value: $ty) -> Self {
                $crate::math::Operand::Value(value)
            }
        }

        impl From<&$ty> for $crate::math::Operand<$ty> {
            fn from(value: &$ty) -> Self {
                $crate::math::Operand::Value(*value)
            }
        }
    };
}

pub(crate) use impl_elementwise_ops;

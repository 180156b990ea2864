use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef, Scalar, Scanner, Valuer};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime type inspection in [`vc_reflect`].
///
/// A `Reflect` value knows its [`TypeInfo`], its [kind], and can be viewed
/// through one of the kind sub-traits ([`Struct`], [`List`], [`Map`],
/// [`Pointer`]) or the [`Dynamic`] slot.
///
/// It's strongly recommended to use [the derive macro] rather than
/// implementing this trait by hand.
///
/// # Zero values
///
/// [`is_zero`] follows the usual "zero value" rules: scalars equal to their
/// `Default`, empty lists and maps, null pointers, empty dynamic slots and
/// structs whose fields are all zero.
///
/// # Scalars
///
/// Numbers, `bool`, `char` and `String` expose a [`Scalar`] view through
/// [`as_scalar`] and accept one through [`set_scalar`], which is how
/// values move between different numeric types.
///
/// # Capabilities
///
/// A type may declare that it can populate itself from any value
/// ([`Scanner`]) or produce a plain value representing itself ([`Valuer`]).
///
/// [`vc_reflect`]: crate
/// [`TypeInfo`]: crate::info::TypeInfo
/// [kind]: ReflectKind
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`Map`]: crate::ops::Map
/// [`Pointer`]: crate::ops::Pointer
/// [`Dynamic`]: crate::ops::Dynamic
/// [the derive macro]: crate::derive::Reflect
/// [`is_zero`]: Reflect::is_zero
/// [`as_scalar`]: Reflect::as_scalar
/// [`set_scalar`]: Reflect::set_scalar
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` returns the id of the box, use this instead.
    ///
    /// ```
    /// use vc_reflect::Reflect;
    /// use core::any::{Any, TypeId};
    ///
    /// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
    ///
    /// assert!(x.type_id() != TypeId::of::<i32>());
    /// assert!(x.ty_id() == TypeId::of::<i32>());
    /// ```
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// Returns the value back if its type does not match.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let mut s = String::new();
    /// assert!(s.set(String::from("abc").into_boxed_reflect()).is_ok());
    /// assert_eq!(s, "abc");
    /// assert!(s.set(1_u8.into_boxed_reflect()).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [kind](ReflectKind) of the value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of the value by kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the value by kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clones the value into a new box of the same concrete type.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Returns `true` if the value is the zero value of its type.
    fn is_zero(&self) -> bool;

    /// Debug formatter for the value.
    ///
    /// The default implementation prints the type path only.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_info().type_path())
    }

    /// Returns the scalar view of a number, `bool`, `char` or string value.
    #[inline]
    fn as_scalar(&self) -> Option<Scalar<'_>> {
        None
    }

    /// Assigns a scalar to this value, converting numbers as the `as` operator does.
    ///
    /// Returns `false` and leaves the value unchanged if the scalar kind is not accepted.
    #[inline]
    fn set_scalar(&mut self, scalar: Scalar<'_>) -> bool {
        let _ = scalar;
        false
    }

    /// Returns the [`Scanner`] capability of this value, if the type declares one.
    #[inline]
    fn as_scanner(&mut self) -> Option<&mut dyn Scanner> {
        None
    }

    /// Returns the [`Valuer`] capability of this value, if the type declares one.
    #[inline]
    fn as_valuer(&self) -> Option<&dyn Valuer> {
        None
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert!(x.downcast_ref::<u32>().is_none());
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the boxed value to type `T`, returning the box on mismatch.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = String::from("a").into_boxed_reflect();
    /// let x = x.take::<u8>().unwrap_err();
    /// assert_eq!(x.take::<String>().unwrap(), "a");
    /// ```
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            match any.downcast::<T>() {
                Ok(value) => Ok(*value),
                // Unreachable, the type was checked above.
                Err(_) => unreachable!("type id checked before downcast"),
            }
        } else {
            Err(self)
        }
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Internal macros

/// Implement `reflect_kind`, `reflect_ref` and `reflect_mut` for a kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

/// Implement the `Reflect` methods shared by every opaque (leaf) type.
///
/// The type must implement `Clone`, `Default`, `PartialEq` and `Debug`.
macro_rules! impl_opaque_reflect {
    () => {
        $crate::reflection::impl_reflect_cast_fn!(Opaque);

        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = <dyn $crate::Reflect>::take::<Self>(value)?;
            Ok(())
        }

        #[inline]
        fn reflect_clone(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
            ::alloc::boxed::Box::new(Clone::clone(self))
        }

        #[inline]
        fn is_zero(&self) -> bool {
            *self == <Self as Default>::default()
        }

        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_opaque_reflect;
pub(crate) use impl_reflect_cast_fn;

use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Getter

type GetterFn = dyn Fn(&dyn Reflect) -> Option<Box<dyn Reflect>> + Send + Sync;

/// A zero-argument method of a struct that produces a value.
///
/// Registered with `#[reflect(getter = method)]` or `#[reflect(getter = method as "Name")]`.
pub struct Getter {
    name: &'static str,
    output: fn() -> &'static TypeInfo,
    func: Box<GetterFn>,
}

impl Getter {
    /// Create a new [`Getter`] calling `func` on a `S` receiver.
    pub fn new<S: Reflect, R: Typed>(name: &'static str, func: fn(&S) -> R) -> Self {
        let call = move |this: &dyn Reflect| -> Option<Box<dyn Reflect>> {
            let this = this.downcast_ref::<S>()?;
            Some(Box::new(func(this)))
        };
        Self {
            name,
            output: R::type_info,
            func: Box::new(call),
        }
    }

    /// Returns the method name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the produced value.
    #[inline]
    pub fn output(&self) -> &'static TypeInfo {
        (self.output)()
    }

    /// Calls the method, returns `None` if `this` is not the receiver type.
    #[inline]
    pub fn call(&self, this: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        (self.func)(this)
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getter")
            .field("name", &self.name)
            .field("output", &self.output().type_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Setter

type SetterFn = dyn Fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> + Send + Sync;

/// A one-argument method of a struct that consumes a value.
///
/// Registered with `#[reflect(setter = method)]` or `#[reflect(setter = method as "Name")]`.
pub struct Setter {
    name: &'static str,
    arg_id: TypeId,
    arg: fn() -> &'static TypeInfo,
    func: Box<SetterFn>,
}

impl Setter {
    /// Create a new [`Setter`] calling `func` on a `S` receiver with an `A` argument.
    pub fn new<S: Reflect, A: Typed>(name: &'static str, func: fn(&mut S, A)) -> Self {
        let call = move |this: &mut dyn Reflect,
                         arg: Box<dyn Reflect>|
              -> Result<(), Box<dyn Reflect>> {
            let Some(this) = this.downcast_mut::<S>() else {
                return Err(arg);
            };
            func(this, arg.take::<A>()?);
            Ok(())
        };
        Self {
            name,
            arg_id: TypeId::of::<A>(),
            arg: A::type_info,
            func: Box::new(call),
        }
    }

    /// Returns the method name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the argument.
    #[inline]
    pub fn arg(&self) -> &'static TypeInfo {
        (self.arg)()
    }

    /// Returns `true` if the argument type is exactly `type_id`.
    #[inline]
    pub fn accepts(&self, type_id: TypeId) -> bool {
        self.arg_id == type_id
    }

    /// Calls the method, giving the argument back if any type does not match.
    #[inline]
    pub fn call(&self, this: &mut dyn Reflect, arg: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        (self.func)(this, arg)
    }
}

impl fmt::Debug for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("name", &self.name)
            .field("arg", &self.arg().type_path())
            .finish()
    }
}

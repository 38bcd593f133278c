//! Resolution requests
//!
//! A request identifies what is being asked for: a type, optionally scoped
//! to a named parameter so rules can tell "any T" apart from "the parameter
//! named X of type T".

use std::any::TypeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    type_id: TypeId,
    type_name: &'static str,
    param: Option<&'static str>,
}

impl Request {
    /// Request for any instance of `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            param: None,
        }
    }

    /// Request for the parameter `name` of type `T`
    pub fn param<T: 'static>(name: &'static str) -> Self {
        Self {
            param: Some(name),
            ..Self::of::<T>()
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn param_name(&self) -> Option<&'static str> {
        self.param
    }
}

//! Domain model of an introspected command line interface

mod command;
mod introspection;
mod param;
mod value_type;

pub use command::CommandNode;
pub use introspection::Introspection;
pub use param::{ArgumentSpec, Arity, OptionSpec, ParamKind, Parameter};
pub use value_type::{display_value, Bounds, TypeDescriptor, TypeKind};

/// Anything that carries a name and help text for completion menus
pub trait Documented {
    fn name(&self) -> &str;

    fn short_help(&self) -> Option<&str> {
        None
    }

    fn help(&self) -> Option<&str>;
}

// https://docs.oracle.com/javase/specs/jvms/se19/html/jvms-4.html

mod access_flags;
mod class_file;
pub mod constant_pool;
mod error;
mod parser;
mod reader;
pub mod serializer;
pub mod sinks;
mod views;

use std::borrow::Cow;
use std::fmt;

pub use self::class_file::{ClassFile, Method, Version};
pub use access_flags::AccessFlags;
pub use constant_pool::ConstantPool;
pub use error::ClassFileError;
pub use parser::{LoadedClass, Parser};
pub use reader::Reader;
pub use serializer::serialize_class_file;
pub use views::{AttributeView, ClassView, MethodView};

pub type Result<T, E = ClassFileError> = std::result::Result<T, E>;

/// A named, length-prefixed blob attached to a class or method. The codec
/// never interprets the payload.
#[derive(Clone, PartialEq)]
pub struct Attribute<'a> {
    pub name_index: u16,
    pub data: Cow<'a, [u8]>,
}
impl fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name_index", &self.name_index)
            .field("data", &format!("({} bytes)", self.data.len()))
            .finish()
    }
}

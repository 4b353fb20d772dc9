use std::borrow::Cow;

use crate::{
    constant_pool::{ClassEntry, Entry},
    AccessFlags, Attribute, ConstantPool, Parser, Result,
};

/// Class file version pair. The default targets major version 55
/// (Java 11); this is a construction policy, not a grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Default for Version {
    fn default() -> Self {
        Self { major: 55, minor: 0 }
    }
}

#[derive(Debug, PartialEq)]
pub struct ClassFile<'a> {
    pub version: Version,
    pub constant_pool: ConstantPool<'a>,
    pub access_flags: AccessFlags,
    pub class_index: u16,
    pub superclass_index: u16,
    pub methods: Vec<Method<'a>>,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> ClassFile<'a> {
    /// Builds a fresh class named `name` extending `superclass`.
    ///
    /// The constant pool is populated in a fixed order: index 1 is the
    /// class name, index 2 its `Class` entry, index 3 the superclass name,
    /// index 4 its `Class` entry. `class_index` and `superclass_index`
    /// point at 2 and 4.
    pub fn new(name: impl Into<Cow<'a, str>>, superclass: impl Into<Cow<'a, str>>) -> Self {
        let mut constant_pool = ConstantPool::new();

        let name_index = constant_pool.intern_utf8(name);
        let class_index = constant_pool.add(Entry::Class(ClassEntry { name_index }));

        let name_index = constant_pool.intern_utf8(superclass);
        let superclass_index = constant_pool.add(Entry::Class(ClassEntry { name_index }));

        Self {
            version: Version::default(),
            constant_pool,
            access_flags: AccessFlags::PUBLIC | AccessFlags::SUPER,
            class_index,
            superclass_index,
            methods: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn parse(bytes: &'a [u8]) -> Result<ClassFile<'a>> {
        Parser::new(bytes).parse()
    }
}

#[derive(Debug, PartialEq)]
pub struct Method<'a> {
    pub access_flags: AccessFlags,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes: Vec<Attribute<'a>>,
}

use std::borrow::Cow;

use crate::{
    constant_pool::{ClassEntry, Utf8Entry},
    AccessFlags, Attribute, ClassFile, ConstantPool, Method, Result,
};

/// Read-only navigation over a parsed class. Index cross-references are
/// resolved through the constant pool on demand; a corrupt index or a
/// tag mismatch surfaces as the underlying resolution error.
#[derive(Debug, Clone, Copy)]
pub struct ClassView<'a> {
    class_file: &'a ClassFile<'a>,
}

impl<'a> ClassView<'a> {
    pub fn new(class_file: &'a ClassFile<'a>) -> Self {
        Self { class_file }
    }

    pub fn name(&self) -> Result<Cow<'a, str>> {
        self.class_name(self.class_file.class_index)
    }

    pub fn superclass(&self) -> Result<Cow<'a, str>> {
        self.class_name(self.class_file.superclass_index)
    }

    /// The first method named `name`, if any. Overloads are not told
    /// apart; the lookup matches on the name alone.
    pub fn method(&self, name: &str) -> Result<Option<MethodView<'a>>> {
        for method in &self.class_file.methods {
            let view = MethodView::new(&self.class_file.constant_pool, method);

            if view.name()? == name {
                return Ok(Some(view));
            }
        }

        Ok(None)
    }

    fn class_name(&self, index: u16) -> Result<Cow<'a, str>> {
        let pool = &self.class_file.constant_pool;
        let class = pool.resolve::<ClassEntry>(index)?;

        Ok(pool.resolve::<Utf8Entry>(class.name_index)?.to_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MethodView<'a> {
    pool: &'a ConstantPool<'a>,
    method: &'a Method<'a>,
}

impl<'a> MethodView<'a> {
    pub fn new(pool: &'a ConstantPool<'a>, method: &'a Method<'a>) -> Self {
        Self { pool, method }
    }

    pub fn name(&self) -> Result<Cow<'a, str>> {
        Ok(self
            .pool
            .resolve::<Utf8Entry>(self.method.name_index)?
            .to_str())
    }

    pub fn descriptor(&self) -> Result<Cow<'a, str>> {
        Ok(self
            .pool
            .resolve::<Utf8Entry>(self.method.descriptor_index)?
            .to_str())
    }

    pub fn access_flags(&self) -> AccessFlags {
        self.method.access_flags
    }

    /// The first attribute named `name`, if any.
    pub fn attribute(&self, name: &str) -> Result<Option<AttributeView<'a>>> {
        for attribute in &self.method.attributes {
            let view = AttributeView::new(self.pool, attribute);

            if view.name()? == name {
                return Ok(Some(view));
            }
        }

        Ok(None)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AttributeView<'a> {
    pool: &'a ConstantPool<'a>,
    attribute: &'a Attribute<'a>,
}

impl<'a> AttributeView<'a> {
    pub fn new(pool: &'a ConstantPool<'a>, attribute: &'a Attribute<'a>) -> Self {
        Self { pool, attribute }
    }

    pub fn name(&self) -> Result<Cow<'a, str>> {
        Ok(self
            .pool
            .resolve::<Utf8Entry>(self.attribute.name_index)?
            .to_str())
    }

    /// The raw payload; the codec does not interpret it.
    pub fn data(&self) -> &'a [u8] {
        &self.attribute.data
    }
}

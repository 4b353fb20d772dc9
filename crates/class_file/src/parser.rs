use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::{
    constant_pool::{tags, ClassEntry, Entry, MethodRefEntry, NameAndTypeEntry, Utf8Entry},
    AccessFlags, Attribute, ClassFile, ClassFileError, ConstantPool, Method, Reader, Result,
    Version,
};

/// Sequential parser over a fully buffered class file. UTF-8 text and
/// attribute payloads stay borrowed slices of the input; trailing bytes
/// after the grammar are ignored.
pub struct Parser<'a> {
    r: Reader<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            r: Reader::new(bytes),
        }
    }

    pub fn parse(mut self) -> Result<ClassFile<'a>> {
        let (version, constant_pool_count) = self.parse_header()?;

        // The on-wire count is one more than the number of entries, index
        // zero being reserved.
        let constant_pool = self.parse_constant_pool(constant_pool_count.saturating_sub(1))?;

        // access_flags, this_class, super_class, interfaces_count
        let mut metadata = Reader::new(self.r.read_bytes(8)?);
        let access_flags = AccessFlags::from_bits_retain(metadata.read_u16_unchecked());
        let class_index = metadata.read_u16_unchecked();
        let superclass_index = metadata.read_u16_unchecked();

        if metadata.read_u16_unchecked() != 0 {
            return Err(ClassFileError::NotImplemented("interfaces"));
        }

        if self.r.read_u16()? != 0 {
            return Err(ClassFileError::NotImplemented("fields"));
        }

        let methods_count = self.r.read_u16()?;
        let methods = (0..methods_count)
            .map(|_| self.parse_method())
            .collect::<Result<Vec<_>>>()?;

        let attributes_count = self.r.read_u16()?;
        let attributes = self.parse_attributes(attributes_count)?;

        Ok(ClassFile {
            version,
            constant_pool,
            access_flags,
            class_index,
            superclass_index,
            methods,
            attributes,
        })
    }

    fn parse_header(&mut self) -> Result<(Version, u16)> {
        // magic, minor, major, constant_pool_count
        let mut header = Reader::new(self.r.read_bytes(10)?);

        match header.read_u32_unchecked() {
            0xCAFEBABE => {}
            magic_identifier => {
                return Err(ClassFileError::InvalidMagicIdentifier(magic_identifier))
            }
        }

        let minor = header.read_u16_unchecked();
        let major = header.read_u16_unchecked();
        let constant_pool_count = header.read_u16_unchecked();

        Ok((Version { major, minor }, constant_pool_count))
    }

    fn parse_constant_pool(&mut self, count: u16) -> Result<ConstantPool<'a>> {
        let mut pool = ConstantPool::new();

        for _ in 0..count {
            let entry = self.parse_entry()?;
            pool.add(entry);
        }

        Ok(pool)
    }

    fn parse_entry(&mut self) -> Result<Entry<'a>> {
        match self.r.read_u8()? {
            tags::UTF8 => self.parse_utf8(),
            tags::CLASS => self.parse_class(),
            tags::METHOD_REF => self.parse_method_ref(),
            tags::NAME_AND_TYPE => self.parse_name_and_type(),
            tag => Err(ClassFileError::InvalidConstantPoolTag(tag)),
        }
    }

    fn parse_utf8(&mut self) -> Result<Entry<'a>> {
        let length = self.r.read_u16()?;
        let text = self.r.read_bytes(length as usize)?;

        Ok(Entry::Utf8(Utf8Entry {
            text: Cow::Borrowed(text),
        }))
    }

    fn parse_class(&mut self) -> Result<Entry<'a>> {
        let name_index = self.r.read_u16()?;

        Ok(Entry::Class(ClassEntry { name_index }))
    }

    fn parse_method_ref(&mut self) -> Result<Entry<'a>> {
        let mut fields = Reader::new(self.r.read_bytes(4)?);

        Ok(Entry::MethodRef(MethodRefEntry {
            class_index: fields.read_u16_unchecked(),
            name_and_type_index: fields.read_u16_unchecked(),
        }))
    }

    fn parse_name_and_type(&mut self) -> Result<Entry<'a>> {
        let mut fields = Reader::new(self.r.read_bytes(4)?);

        Ok(Entry::NameAndType(NameAndTypeEntry {
            name_index: fields.read_u16_unchecked(),
            descriptor_index: fields.read_u16_unchecked(),
        }))
    }

    fn parse_method(&mut self) -> Result<Method<'a>> {
        // access_flags, name_index, descriptor_index, attributes_count
        let mut header = Reader::new(self.r.read_bytes(8)?);
        let access_flags = AccessFlags::from_bits_retain(header.read_u16_unchecked());
        let name_index = header.read_u16_unchecked();
        let descriptor_index = header.read_u16_unchecked();
        let attributes_count = header.read_u16_unchecked();

        let attributes = self.parse_attributes(attributes_count)?;

        Ok(Method {
            access_flags,
            name_index,
            descriptor_index,
            attributes,
        })
    }

    fn parse_attribute(&mut self) -> Result<Attribute<'a>> {
        // name_index, payload length
        let mut header = Reader::new(self.r.read_bytes(6)?);
        let name_index = header.read_u16_unchecked();
        let length = header.read_u32_unchecked();

        let data = self.r.read_bytes(length as usize)?;

        Ok(Attribute {
            name_index,
            data: Cow::Borrowed(data),
        })
    }

    fn parse_attributes(&mut self, count: u16) -> Result<Vec<Attribute<'a>>> {
        (0..count).map(|_| self.parse_attribute()).collect()
    }
}

/// A class file's raw bytes bundled with the ability to parse them. The
/// parsed model borrows its UTF-8 text and attribute payloads from the
/// owned buffer, so the aggregate must outlive any [`ClassFile`] derived
/// from it.
#[derive(Debug)]
pub struct LoadedClass {
    raw: Vec<u8>,
}

impl LoadedClass {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            raw: fs::read(path)?,
        })
    }

    pub fn from_bytes(raw: Vec<u8>) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Parses a model borrowing from the owned buffer.
    pub fn class_file(&self) -> Result<ClassFile<'_>> {
        ClassFile::parse(&self.raw)
    }
}

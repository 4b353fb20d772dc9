use crate::{constant_pool::Entry, sinks::Sink, Attribute, ClassFile, ConstantPool, Method, Result};

/// Emits `class_file` in wire order, big-endian throughout. Serializing a
/// parsed class reproduces the input bytes exactly.
pub fn serialize_class_file<S: Sink>(sink: &mut S, class_file: &ClassFile) -> Result<()> {
    sink.write_u32(0xCAFEBABE)?;
    sink.write_u16(class_file.version.minor)?;
    sink.write_u16(class_file.version.major)?;
    sink.write_u16(class_file.constant_pool.entries().len() as u16 + 1)?;

    serialize_constant_pool(sink, &class_file.constant_pool)?;

    sink.write_u16(class_file.access_flags.bits())?;
    sink.write_u16(class_file.class_index)?;
    sink.write_u16(class_file.superclass_index)?;

    // Interfaces and fields are not modeled; their counts are always zero.
    sink.write_u16(0)?;
    sink.write_u16(0)?;

    sink.write_u16(class_file.methods.len() as u16)?;
    for method in &class_file.methods {
        serialize_method(sink, method)?;
    }

    sink.write_u16(class_file.attributes.len() as u16)?;
    for attribute in &class_file.attributes {
        serialize_attribute(sink, attribute)?;
    }

    Ok(())
}

pub fn serialize_constant_pool<S: Sink>(sink: &mut S, pool: &ConstantPool) -> Result<()> {
    for entry in pool {
        serialize_entry(sink, entry)?;
    }

    Ok(())
}

pub fn serialize_entry<S: Sink>(sink: &mut S, entry: &Entry) -> Result<()> {
    sink.write_u8(entry.tag())?;

    match entry {
        Entry::Class(class) => sink.write_u16(class.name_index)?,
        Entry::MethodRef(method_ref) => {
            sink.write_u16(method_ref.class_index)?;
            sink.write_u16(method_ref.name_and_type_index)?;
        }
        Entry::NameAndType(name_and_type) => {
            sink.write_u16(name_and_type.name_index)?;
            sink.write_u16(name_and_type.descriptor_index)?;
        }
        Entry::Utf8(utf8) => {
            sink.write_u16(utf8.as_bytes().len() as u16)?;
            sink.write_bytes(utf8.as_bytes())?;
        }
    }

    Ok(())
}

pub fn serialize_method<S: Sink>(sink: &mut S, method: &Method) -> Result<()> {
    sink.write_u16(method.access_flags.bits())?;
    sink.write_u16(method.name_index)?;
    sink.write_u16(method.descriptor_index)?;
    sink.write_u16(method.attributes.len() as u16)?;

    for attribute in &method.attributes {
        serialize_attribute(sink, attribute)?;
    }

    Ok(())
}

pub fn serialize_attribute<S: Sink>(sink: &mut S, attribute: &Attribute) -> Result<()> {
    sink.write_u16(attribute.name_index)?;
    sink.write_u32(attribute.data.len() as u32)?;
    sink.write_bytes(&attribute.data)?;

    Ok(())
}

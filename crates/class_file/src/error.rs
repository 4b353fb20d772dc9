use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassFileError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error("Unexpected end of class file data")]
    Truncated,
    #[error("Invalid magic identifier: 0x{0:X}")]
    InvalidMagicIdentifier(u32),
    #[error("Invalid constant pool tag: {0}")]
    InvalidConstantPoolTag(u8),
    #[error("Class file feature not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("Invalid constant pool index: {0}")]
    InvalidConstantPoolIndex(u16),
    #[error("Expected {expected} constant pool entry, found {found}")]
    UnexpectedConstantPoolEntry {
        expected: &'static str,
        found: &'static str,
    },
}

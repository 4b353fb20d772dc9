use bitflags::bitflags;

bitflags! {
    // Bits outside the named set are preserved verbatim across a
    // parse/serialize round trip, hence from_bits_retain at every wire
    // boundary.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SUPER = 0x0020;
        const ABSTRACT = 0x0400;
    }
}

use keyhole_class_file::constant_pool::{
    ClassEntry, Entry, MethodRefEntry, NameAndTypeEntry, Utf8Entry,
};
use keyhole_class_file::{ClassFileError, ConstantPool};

#[test]
fn test_entry_tags_match_the_wire_format() {
    assert_eq!(7, Entry::Class(ClassEntry { name_index: 0 }).tag());
    assert_eq!(
        10,
        Entry::MethodRef(MethodRefEntry {
            class_index: 0,
            name_and_type_index: 0
        })
        .tag()
    );
    assert_eq!(
        12,
        Entry::NameAndType(NameAndTypeEntry {
            name_index: 0,
            descriptor_index: 0
        })
        .tag()
    );
    assert_eq!(1, Entry::Utf8(Utf8Entry::new("")).tag());
}

#[test]
fn test_entry_names_label_each_variant() {
    assert_eq!("Class", Entry::Class(ClassEntry { name_index: 0 }).name());
    assert_eq!("Utf8", Entry::Utf8(Utf8Entry::new("")).name());
}

#[test]
fn test_resolve_fails_on_type_mismatch() {
    let mut pool = ConstantPool::new();
    pool.add(Entry::Class(ClassEntry { name_index: 1 }));

    assert!(matches!(
        pool.resolve::<Utf8Entry>(1),
        Err(ClassFileError::UnexpectedConstantPoolEntry {
            expected: "Utf8",
            found: "Class"
        })
    ));
}

#[test]
fn test_resolve_fails_on_out_of_bounds_index() {
    let pool = ConstantPool::new();

    assert!(matches!(
        pool.resolve::<Utf8Entry>(15),
        Err(ClassFileError::InvalidConstantPoolIndex(15))
    ));
}

#[test]
fn test_resolve_fails_one_past_the_last_entry() {
    let mut pool = ConstantPool::new();
    pool.add(Entry::Utf8(Utf8Entry::new("Test")));

    assert!(pool.resolve::<Utf8Entry>(1).is_ok());
    assert!(matches!(
        pool.resolve::<Utf8Entry>(2),
        Err(ClassFileError::InvalidConstantPoolIndex(2))
    ));
}

#[test]
fn test_resolve_fails_on_zero_index() {
    let mut pool = ConstantPool::new();
    pool.add(Entry::Utf8(Utf8Entry::new("Test")));

    assert!(matches!(
        pool.resolve::<Utf8Entry>(0),
        Err(ClassFileError::InvalidConstantPoolIndex(0))
    ));
}

#[test]
fn test_resolve_returns_a_stable_reference() {
    let mut pool = ConstantPool::new();
    pool.add(Entry::Utf8(Utf8Entry::new("ExampleEntry")));

    let entry = pool.resolve::<Utf8Entry>(1).unwrap();
    let entry2 = pool.resolve::<Utf8Entry>(1).unwrap();

    assert!(std::ptr::eq(entry, entry2));
}

#[test]
fn test_interning_an_existing_text_is_a_noop() {
    let mut pool = ConstantPool::new();
    pool.add(Entry::Utf8(Utf8Entry::new("MyExample")));

    let index = pool.intern_utf8("MyExample");

    assert_eq!(1, index);
    assert_eq!(1, pool.entries().len());
}

#[test]
fn test_interning_new_text_appends_an_entry() {
    let mut pool = ConstantPool::new();
    pool.add(Entry::Utf8(Utf8Entry::new("FirstExample")));

    let index = pool.intern_utf8("NewExample");

    assert_eq!(2, index);
    assert_eq!(2, pool.entries().len());
}

#[test]
fn test_interning_is_idempotent() {
    let mut pool = ConstantPool::new();

    let first = pool.intern_utf8("OnlyOnce");
    let second = pool.intern_utf8("OnlyOnce");

    assert_eq!(first, second);
    assert_eq!(1, pool.entries().len());
}

#[test]
fn test_duplicate_utf8_entries_keep_the_first_interned_index() {
    let mut pool = ConstantPool::new();
    pool.add(Entry::Utf8(Utf8Entry::new("Duplicated")));
    pool.add(Entry::Utf8(Utf8Entry::new("Duplicated")));

    // Both entries survive in sequence order, but the interning map keeps
    // pointing at the first.
    assert_eq!(2, pool.entries().len());
    assert_eq!(1, pool.intern_utf8("Duplicated"));
}

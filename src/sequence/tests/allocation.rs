use super::*;

#[test]
fn allocation() {
    let sequence = Sequence::<i32>::allocate(3);
    assert_eq!(sequence.size(), 0);
    assert_eq!(sequence.capacity(), 3);
    assert!(sequence.is_empty());

    let sequence = FixedSequence::<i32>::allocate(0);
    assert_eq!(sequence.size(), 0);
    assert_eq!(sequence.capacity(), 0);

    let sequence = Sequence::<i32>::default();
    assert_eq!(sequence.capacity(), 0);
}

#[test]
fn allocation_from_values() {
    let sequence = Sequence::<i32>::allocate_from(vec![1, 2, 3]);
    assert_eq!(sequence.size(), 3);
    assert_eq!(sequence.capacity(), 3);
    assert_eq!(sequence.snapshot(), vec![1, 2, 3]);

    let collected: Sequence<char> = "abc".chars().collect();
    assert_eq!(collected, characters("abc"));
}

#[test]
fn size_is_not_capacity() -> anyhow::Result<()> {
    let mut sequence = Sequence::<i32>::allocate(10);
    sequence.add(1, 0)?;
    sequence.add(2, 1)?;
    assert_eq!(sequence.size(), 2);
    assert_eq!(sequence.capacity(), 10);

    sequence.remove(0)?;
    assert_eq!(sequence.size(), 1);
    assert_eq!(sequence.capacity(), 10);
    Ok(())
}

#[test]
fn clone_is_deep() -> anyhow::Result<()> {
    let mut original = Sequence::<String>::allocate(4);
    original.add("Hello".to_string(), 0)?;
    original.add("World".to_string(), 1)?;

    let mut copy = original.clone();
    assert_eq!(copy.size(), original.size());
    assert_eq!(copy.capacity(), original.capacity());
    assert_eq!(copy, original);

    copy.set("Goodbye".to_string(), 0)?;
    copy.add("!".to_string(), 2)?;

    assert_eq!(original.snapshot(), vec!["Hello".to_string(), "World".to_string()]);
    assert_eq!(copy.snapshot(), vec!["Goodbye".to_string(), "World".to_string(), "!".to_string()]);
    Ok(())
}

#[test]
fn equality_ignores_capacity() -> anyhow::Result<()> {
    let mut roomy = Sequence::<char>::allocate(16);
    roomy.add('a', 0)?;
    roomy.add('b', 1)?;

    let exact: FixedSequence<char> = "ab".chars().collect();
    assert_eq!(roomy, exact);
    assert!(roomy.length_eq(&characters("xy")));
    assert_eq!(roomy.length_cmp(&characters("xyz")), std::cmp::Ordering::Less);
    assert_ne!(roomy, characters("ba"));
    assert_ne!(roomy, characters("abc"));
    Ok(())
}

#[test]
fn debug_lists_present_elements() -> anyhow::Result<()> {
    let mut sequence = Sequence::<i32>::allocate(8);
    sequence.add(1, 0)?;
    sequence.add(2, 1)?;
    assert_eq!(format!("{:?}", sequence), "[1, 2]");
    Ok(())
}

#[test]
fn iteration() {
    let sequence = characters("abcdef");
    assert_eq!(sequence.iter().len(), 6);
    assert_eq!(sequence.iter().rev().collect::<String>(), "fedcba");

    let mut seen = String::new();
    for c in &sequence {
        seen.push(*c);
    }
    assert_eq!(seen, "abcdef");
}

#[test]
fn extend() {
    init_tracing();

    let mut sequence = Sequence::<i32>::allocate(1);
    sequence.extend(0..100);
    assert_eq!(sequence.size(), 100);
    assert_eq!(sequence.snapshot(), (0..100).collect::<Vec<_>>());
}

#[test]
#[should_panic]
fn extend_fixed_overflow() {
    let mut sequence = FixedSequence::<i32>::allocate(2);
    sequence.extend(0..3);
}

use dotstore::doc::{PathBuf, PathError};

#[test]
fn test_path_segments_follow_dots() {
    let path: PathBuf = "a.b.c".parse().unwrap();
    assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(path.parent_segments().len(), 2);
}

#[test]
fn test_path_keeps_non_dot_characters() {
    let path: PathBuf = "with space.ünïcode.0".parse().unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.last(), "0");
}

#[test]
fn test_invalid_paths() {
    assert_eq!("".parse::<PathBuf>(), Err(PathError::Empty));
    for input in ["a..b", ".", "..", ".a", "a.", "a.b."] {
        let err = input.parse::<PathBuf>().unwrap_err();
        assert_eq!(err.path(), Some(input));
    }
}

#[test]
fn test_path_error_converts_to_crate_error() {
    let err: dotstore::Error = PathBuf::parse("a..b").unwrap_err().into();
    assert!(err.is_invalid_path());
    assert_eq!(err.module(), "doc");
}

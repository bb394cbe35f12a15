use signer_core::coords::{load_coordinate, CoordinateSink, FileSink, ImagePoint};
use signer_core::error::SignerError;

#[test]
fn test_display() {
    assert_eq!(ImagePoint::new(120, 45).to_string(), "120,45");
}

#[test]
fn test_parse() {
    assert_eq!("120,45".parse::<ImagePoint>().unwrap(), ImagePoint::new(120, 45));
    assert_eq!(" 7 , 9 \n".parse::<ImagePoint>().unwrap(), ImagePoint::new(7, 9));
}

#[test]
fn test_parse_rejects_garbage() {
    for bad in ["", "12", "a,b", "1,2,3", "-4,5", "1.5,2"] {
        let err = bad.parse::<ImagePoint>().unwrap_err();
        assert!(matches!(err, SignerError::InvalidCoordinate(_)), "{bad:?}");
    }
}

#[test]
fn test_file_sink_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("name_coords.txt");
    let mut sink = FileSink::new(&path);
    assert_eq!(sink.path(), path.as_path());

    sink.store(ImagePoint::new(1, 2)).unwrap();
    sink.store(ImagePoint::new(300, 400)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "300,400\n");
}

#[test]
fn test_load_coordinate_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coords.txt");
    std::fs::write(&path, "640,480\nignored\n").unwrap();
    assert_eq!(load_coordinate(&path).unwrap(), ImagePoint::new(640, 480));
}

#[test]
fn test_load_coordinate_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_coordinate(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, SignerError::Io(_)));
}

#[test]
fn test_file_sink_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(dir.path().join("missing").join("coords.txt"));
    assert!(sink.store(ImagePoint::new(1, 1)).is_err());
}

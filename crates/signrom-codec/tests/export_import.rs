//! File-level export and import tests.

use std::fs;

use signrom_codec::{
    Decoded, EditMode, EditorSession, EpromWriter, PLANE_LEN, SignError, import_file, read_planes,
    reassemble, to_bytes,
};

#[test]
fn drawing_export_writes_two_raw_planes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = EditorSession::with_mode(EditMode::Draw);
    session.load_predefined("Cross").expect("built-in pattern");
    let planes = session.planes().expect("planes");

    let paths = EpromWriter::new(dir.path(), EditMode::Draw)
        .with_timestamp("2026-10-18T09-41-07-123Z")
        .write(&planes)
        .expect("write planes");

    assert_eq!(
        paths.columns.file_name().and_then(|n| n.to_str()),
        Some("pharmacy-sign-drawing-eprom1-columns-2026-10-18T09-41-07-123Z.bin")
    );
    assert_eq!(fs::read(&paths.columns).expect("read columns"), planes.columns.to_vec());
    assert_eq!(fs::read(&paths.rows).expect("read rows"), planes.rows.to_vec());
    assert_eq!(fs::metadata(&paths.rows).expect("metadata").len(), PLANE_LEN as u64);
}

#[test]
fn exported_pair_reimports_as_drawing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = EditorSession::with_mode(EditMode::Draw);
    session.load_predefined("Star").expect("built-in pattern");
    session.toggle(7, 0);
    let original = *session.matrix();

    let paths = EpromWriter::new(dir.path(), EditMode::Draw)
        .write(&session.planes().expect("planes"))
        .expect("write planes");

    let planes = read_planes(&paths.columns, &paths.rows).expect("read pair");
    let buffer_path = dir.path().join("image.bin");
    fs::write(&buffer_path, to_bytes(&reassemble(&planes))).expect("write buffer");

    let mut restored = EditorSession::with_mode(EditMode::Draw);
    restored
        .import(&fs::read(&buffer_path).expect("read buffer"))
        .expect("import");
    assert_eq!(*restored.matrix(), original);

    let decoded = import_file(&buffer_path, EditMode::Draw).expect("import file");
    assert_eq!(decoded, Decoded::Matrix(original));
}

#[test]
fn text_export_uses_text_prefix() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = EditorSession::new();
    session.set_text("OK").expect("valid text");

    let paths = EpromWriter::new(dir.path(), session.mode())
        .write(&session.planes().expect("planes"))
        .expect("write planes");

    let name = paths
        .rows
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name");
    assert!(name.starts_with("pharmacy-sign-text-eprom2-rows-"));
    assert!(name.ends_with(".bin"));
}

#[test]
fn text_import_reads_whole_file_as_text() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("message.bin");
    fs::write(&path, b"PHARMACIE DE GARDE").expect("write");

    let decoded = import_file(&path, EditMode::Text).expect("import");
    assert_eq!(decoded, Decoded::Text("PHARMACIE DE GARDE".to_string()));
}

#[test]
fn text_import_rejects_invalid_utf8() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("garbage.bin");
    fs::write(&path, [0x41, 0x80, 0x42]).expect("write");

    let err = import_file(&path, EditMode::Text).unwrap_err();
    assert!(matches!(err, SignError::Decode(e) if e.offset == 1));
}

#[test]
fn tampered_pair_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = EditorSession::with_mode(EditMode::Draw);
    session.load_predefined("Plus").expect("built-in pattern");
    let paths = EpromWriter::new(dir.path(), EditMode::Draw)
        .write(&session.planes().expect("planes"))
        .expect("write planes");

    fs::write(&paths.columns, [0xFF; PLANE_LEN]).expect("overwrite columns");
    let err = read_planes(&paths.columns, &paths.rows).unwrap_err();
    assert!(matches!(err, SignError::PlaneMismatch { column: 0, .. }));

    fs::write(&paths.rows, [0xFF; 3]).expect("truncate rows");
    let err = read_planes(&paths.columns, &paths.rows).unwrap_err();
    assert!(matches!(err, SignError::PlaneLength { actual: 3, .. }));
}

//! End-to-end compilation of staged icon directories.

use std::{fs::write, path::Path};

use iconfont_compiler::{CompileOptions, Error, Warning, compile_dir, staged_file_name};
use read_fonts::{
    FontRef, TableProvider,
    types::{GlyphId, GlyphId16, Version16Dot16},
};

/// Square icon whose viewport width grows with `index`, so each glyph has a
/// distinct advance after normalization.
fn square_icon(index: usize) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} 24"><path d="M2 2H22V22H2Z"/></svg>"#,
        24 + index
    )
}

fn stage(dir: &Path, count: usize) {
    for index in 0..count {
        write(dir.join(staged_file_name(index)), square_icon(index)).unwrap();
    }
}

#[test]
fn test_compile_maps_codepoints_in_index_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    stage(dir.path(), 12);

    let font = compile_dir(dir.path(), &CompileOptions::new("Icons")).unwrap();
    assert_eq!(font.icon_count, 12);
    assert!(font.warnings.is_empty());

    let font_ref = FontRef::new(&font.data).unwrap();
    assert_eq!(font_ref.maxp().unwrap().num_glyphs(), 13);

    let cmap = font_ref.cmap().unwrap();
    for index in 0..12u32 {
        assert_eq!(cmap.map_codepoint(0xE900 + index), Some(GlyphId::new(index + 1)));
    }
    assert_eq!(cmap.map_codepoint(0xE900u32 + 12), None);
    assert_eq!(cmap.map_codepoint(0xE8FFu32), None);

    // icon_10 must follow icon_9, not icon_1.
    let hmtx = font_ref.hmtx().unwrap();
    let advances: Vec<u16> = hmtx.h_metrics().iter().map(|m| m.advance()).collect();
    for index in 0..12usize {
        let expected = ((24 + index) as f64 * 1000.0 / 24.0).round() as u16;
        assert_eq!(advances[index + 1], expected, "advance of icon_{index}");
    }
}

#[test]
fn test_compile_sets_units_per_em_and_family_name() {
    let dir = tempfile::tempdir().unwrap();
    stage(dir.path(), 2);

    let options = CompileOptions::new("MyIcons").with_font_height(2048);
    let font = compile_dir(dir.path(), &options).unwrap();
    let font_ref = FontRef::new(&font.data).unwrap();

    assert_eq!(font_ref.head().unwrap().units_per_em(), 2048);

    let name = font_ref.name().unwrap();
    let family = name
        .name_record()
        .iter()
        .find(|record| record.name_id().to_u16() == 1)
        .and_then(|record| record.string(name.string_data()).ok())
        .map(|s| s.chars().collect::<String>());
    assert_eq!(family.as_deref(), Some("MyIcons"));
}

#[test]
fn test_compile_custom_start_codepoint() {
    let dir = tempfile::tempdir().unwrap();
    stage(dir.path(), 3);

    let options = CompileOptions::new("Icons").with_start_codepoint(0xF000);
    let font = compile_dir(dir.path(), &options).unwrap();
    let cmap = FontRef::new(&font.data).unwrap().cmap().unwrap();

    assert_eq!(cmap.map_codepoint(0xF000u32), Some(GlyphId::new(1)));
    assert_eq!(cmap.map_codepoint(0xF002u32), Some(GlyphId::new(3)));
}

#[test]
fn test_start_codepoint_past_unicode_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    stage(dir.path(), 2);

    let options = CompileOptions::new("Icons").with_start_codepoint(u32::MAX);
    let err = compile_dir(dir.path(), &options).unwrap_err();
    assert!(matches!(err, Error::InvalidCodepoint(u32::MAX)));
}

#[test]
fn test_post_names_glyphs_after_staged_files() {
    let dir = tempfile::tempdir().unwrap();
    stage(dir.path(), 2);

    let font = compile_dir(dir.path(), &CompileOptions::new("Icons")).unwrap();
    let post = FontRef::new(&font.data).unwrap().post().unwrap();

    assert_eq!(post.version(), Version16Dot16::VERSION_2_0);
    assert_eq!(post.glyph_name(GlyphId16::new(0)), Some(".notdef"));
    assert_eq!(post.glyph_name(GlyphId16::new(1)), Some("icon_0"));
    assert_eq!(post.glyph_name(GlyphId16::new(2)), Some("icon_1"));
}

#[test]
fn test_compile_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    stage(dir.path(), 4);
    let options = CompileOptions::new("Icons");

    let first = compile_dir(dir.path(), &options).unwrap();
    let second = compile_dir(dir.path(), &options).unwrap();
    assert_eq!(first.data, second.data);
}

#[test]
fn test_empty_icon_is_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    stage(dir.path(), 1);
    write(
        dir.path().join(staged_file_name(1)),
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M2 2L22 22" fill="none" stroke="black"/></svg>"#,
    )
    .unwrap();

    let font = compile_dir(dir.path(), &CompileOptions::new("Icons")).unwrap();
    assert_eq!(font.icon_count, 2);
    assert!(matches!(font.warnings.as_slice(), [Warning::EmptyGlyph { index: 1, .. }]));

    let cmap = FontRef::new(&font.data).unwrap().cmap().unwrap();
    assert_eq!(cmap.map_codepoint(0xE901u32), Some(GlyphId::new(2)));
}

#[test]
fn test_unrelated_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    stage(dir.path(), 2);
    write(dir.path().join("notes.txt"), "hello").unwrap();
    write(dir.path().join("home.svg"), square_icon(0)).unwrap();

    let font = compile_dir(dir.path(), &CompileOptions::new("Icons")).unwrap();
    assert_eq!(font.icon_count, 2);
}

#[test]
fn test_gap_in_indices_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path().join(staged_file_name(0)), square_icon(0)).unwrap();
    write(dir.path().join(staged_file_name(2)), square_icon(2)).unwrap();

    let err = compile_dir(dir.path(), &CompileOptions::new("Icons")).unwrap_err();
    assert!(matches!(err, Error::NonContiguous { expected: 1, found: 2 }));
}

#[test]
fn test_empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = compile_dir(dir.path(), &CompileOptions::new("Icons")).unwrap_err();
    assert!(matches!(err, Error::NoIcons(_)));
}

#[test]
fn test_unparseable_icon_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path().join(staged_file_name(0)), "<svg").unwrap();

    let err = compile_dir(dir.path(), &CompileOptions::new("Icons")).unwrap_err();
    assert!(matches!(err, Error::ParseSvg { .. }));
}

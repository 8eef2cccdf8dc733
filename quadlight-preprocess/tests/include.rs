use quadlight_preprocess::{read_source, FileSystem, PreprocessError, ShaderSource};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn splices_nested_includes() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("main.hlsl"), "#include \"lib/a.hlsl\"\nfloat main_body;\n").unwrap();
    fs::write(dir.path().join("lib/a.hlsl"), "#include \"b.hlsl\"\nfloat a;\n").unwrap();
    fs::write(dir.path().join("lib/b.hlsl"), "float b;\n").unwrap();

    let source = read_source(&FileSystem::new(dir.path()), "main.hlsl").unwrap();
    let b = source.find("float b;").unwrap();
    let a = source.find("float a;").unwrap();
    let body = source.find("float main_body;").unwrap();
    assert!(b < a && a < body);
    assert!(!source.contains("#include"));
}

#[test]
fn rejects_recursive_includes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.hlsl"), "#include \"b.hlsl\"\n").unwrap();
    fs::write(dir.path().join("b.hlsl"), "#include \"a.hlsl\"\n").unwrap();

    let err = read_source(&FileSystem::new(dir.path()), "a.hlsl").unwrap_err();
    assert!(matches!(err, PreprocessError::RecursiveInclude(_)));
}

#[test]
fn rejects_recursive_includes_through_parent_dirs() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("a.hlsl"), "#include \"lib/../a.hlsl\"\n").unwrap();

    let err = read_source(&FileSystem::new(dir.path()), "a.hlsl").unwrap_err();
    match err {
        PreprocessError::RecursiveInclude(path) => assert_eq!(path, PathBuf::from("a.hlsl")),
        e => panic!("unexpected error {e:?}"),
    }
}

#[test]
fn resolves_includes_through_parent_dirs() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("a.hlsl"), "#include \"lib/../b.hlsl\"\nfloat a;\n").unwrap();
    fs::write(dir.path().join("b.hlsl"), "float b;\n").unwrap();

    let source = read_source(&FileSystem::new(dir.path()), "a.hlsl").unwrap();
    assert!(source.find("float b;").unwrap() < source.find("float a;").unwrap());
}

#[cfg(feature = "line_directives")]
#[test]
fn line_directives_count_leading_blank_lines() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.hlsl"),
        "\n\nfloat x;\n#include \"b.hlsl\"\nfloat y;\n",
    )
    .unwrap();
    fs::write(dir.path().join("b.hlsl"), "float b;\n").unwrap();

    let source = read_source(&FileSystem::new(dir.path()), "a.hlsl").unwrap();
    assert_eq!(
        source,
        "#line 1 \"a.hlsl\"\n\n\nfloat x;\n#line 1 \"b.hlsl\"\nfloat b;\n#line 5 \"a.hlsl\"\nfloat y;\n"
    );
}

#[test]
fn rejects_empty_include() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.hlsl"), "float x;\n#include\n").unwrap();

    let err = read_source(&FileSystem::new(dir.path()), "a.hlsl").unwrap_err();
    assert!(matches!(err, PreprocessError::UnexpectedEol(1)));
}

#[test]
fn missing_stage_file_is_io_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("vertex.hlsl"), "float4 VS_main() : SV_POSITION { return 0; }\n").unwrap();

    let err = ShaderSource::load(dir.path()).unwrap_err();
    match err {
        PreprocessError::IOError(path, _) => assert!(path.ends_with("geometry.hlsl")),
        e => panic!("unexpected error {e:?}"),
    }
}

#[test]
fn loads_shipped_shader_directory() {
    let source = ShaderSource::load(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders")).unwrap();
    let builtin = ShaderSource::builtin().unwrap();
    assert_eq!(source.fragment, builtin.fragment);
}

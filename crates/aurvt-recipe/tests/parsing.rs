//! Tests for PKGBUILD field extraction

use aurvt_core::CoreError;
use aurvt_recipe::parsers::{extract_field, extract_source_array};
use aurvt_recipe::variables::VariableTable;
use aurvt_recipe::{parse_pkgbuild, read_pkgbuild};
use tempfile::TempDir;

const HUNSPELL: &str = r#"# Maintainer: someone <someone@example.org>
pkgname=python-hunspell
_name=pyhunspell
pkgver=0.5.5
pkgrel=1
pkgdesc="Python bindings for hunspell"
arch=('x86_64')
url="https://github.com/pyhunspell/${_name}"
license=('LGPL3')
source=(
    "$pkgname-$pkgver.tar.gz::$url/archive/refs/tags/$pkgver.tar.gz"
    'fix-build.patch'
)
sha256sums=('SKIP' 'SKIP')
"#;

// ── scalar fields ─────────────────────────────────────────────────────────────

#[test]
fn test_fields_any_order_and_quoting() {
    let text = r#"
url = 'https://github.com/o/r'
pkgver="2.0.1"
  pkgname =   mytool
"#;
    let recipe = parse_pkgbuild(text).unwrap();
    assert_eq!(recipe.name, "mytool");
    assert_eq!(recipe.version, "2.0.1");
    assert_eq!(recipe.url, "https://github.com/o/r");
}

#[test]
fn test_extract_field_absent() {
    assert_eq!(extract_field("pkgname=foo\n", "pkgver").unwrap(), None);
}

#[test]
fn test_each_mandatory_field_is_fatal() {
    let cases = [
        ("pkgver=1\nurl=u\n", "pkgname"),
        ("pkgname=n\nurl=u\n", "pkgver"),
        ("pkgname=n\npkgver=1\n", "url"),
    ];
    for (text, field) in cases {
        let err = parse_pkgbuild(text).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::MissingField(field)),
            "expected missing {} for {:?}",
            field,
            text
        );
    }
}

#[test]
fn test_empty_quoted_value_counts_as_missing() {
    let err = parse_pkgbuild("pkgname=n\npkgver=''\nurl=u\n").unwrap_err();
    assert_eq!(err.downcast_ref::<CoreError>(), Some(&CoreError::MissingField("pkgver")));
}

#[test]
fn test_variables_in_pkgver_and_url() {
    let text = "_ver=1.2.3\npkgname=foo\npkgver=$_ver\nurl=https://example.org/foo/${_ver}\n";
    let recipe = parse_pkgbuild(text).unwrap();
    assert_eq!(recipe.version, "1.2.3");
    assert_eq!(recipe.url, "https://example.org/foo/1.2.3");
}

// ── source array ──────────────────────────────────────────────────────────────

#[test]
fn test_multiline_source_array() {
    let recipe = parse_pkgbuild(HUNSPELL).unwrap();
    assert_eq!(recipe.url, "https://github.com/pyhunspell/pyhunspell");
    assert_eq!(
        recipe.sources,
        vec![
            "python-hunspell-0.5.5.tar.gz::https://github.com/pyhunspell/pyhunspell/archive/refs/tags/0.5.5.tar.gz",
            "fix-build.patch",
        ]
    );
}

#[test]
fn test_empty_source_block() {
    let recipe = parse_pkgbuild("pkgname=n\npkgver=1\nurl=u\nsource=()\n").unwrap();
    assert!(recipe.sources.is_empty());
}

#[test]
fn test_single_line_source_array() {
    let text = "source=(\"a.tar.gz\" 'b.patch')\n";
    let table = VariableTable::parse(text).unwrap();
    assert_eq!(extract_source_array(text, &table).unwrap(), vec!["a.tar.gz", "b.patch"]);
}

#[test]
fn test_source_array_skips_comments() {
    let text = "source=(\n  # upstream tarball\n  one\n\n  two\n)\n";
    let table = VariableTable::parse(text).unwrap();
    assert_eq!(extract_source_array(text, &table).unwrap(), vec!["one", "two"]);
}

#[test]
fn test_source_entry_with_trailing_comment() {
    let text = "source=(\n  \"$pkgver.tar.gz\" # upstream tarball\n  fix.patch\n)\npkgver=1.0\n";
    let table = VariableTable::parse(text).unwrap();
    assert_eq!(extract_source_array(text, &table).unwrap(), vec!["1.0.tar.gz", "fix.patch"]);
}

#[test]
fn test_arch_specific_source_not_taken() {
    let text = "source_x86_64=(bin.tar.gz)\n";
    let table = VariableTable::parse(text).unwrap();
    assert!(extract_source_array(text, &table).unwrap().is_empty());
}

// ── reading from disk ─────────────────────────────────────────────────────────

#[test]
fn test_read_pkgbuild_from_directory() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("PKGBUILD"), HUNSPELL).unwrap();

    let recipe = read_pkgbuild(tmp.path()).unwrap();
    assert_eq!(recipe.name, "python-hunspell");
}

#[test]
fn test_read_pkgbuild_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = read_pkgbuild(tmp.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to read PKGBUILD"));
}

//! CLI integration tests for ras-tool

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file_with(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

fn ras_tool() -> Command {
    Command::cargo_bin("ras-tool").unwrap()
}

#[test]
fn info_reports_size() {
    let file = temp_file_with(b"BM\x00\x00hello");

    ras_tool()
        .arg("info")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(9 bytes)"))
        .stdout(predicate::str::contains("Access: memory mapped"));
}

#[test]
fn info_with_plain_access() {
    let file = temp_file_with(b"data");

    ras_tool()
        .args(["--plain", "info"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Access: plain file access"));
}

#[test]
fn info_with_in_memory_access() {
    let file = temp_file_with(b"data");

    ras_tool()
        .args(["--in-memory", "info"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Access: in memory"));
}

#[test]
fn dump_range() {
    let file = temp_file_with(b"0123456789abcdefXYZ");

    ras_tool()
        .arg("dump")
        .arg(file.path())
        .args(["--offset", "16", "--length", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00000010  58 59 5a"))
        .stdout(predicate::str::contains("|XYZ|"));
}

#[test]
fn read_values_in_both_byte_orders() {
    let file = temp_file_with(&[0x12, 0x34, 0x12, 0x34]);

    ras_tool()
        .arg("read")
        .arg(file.path())
        .args(["--type", "u16", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00000000: 4660"))
        .stdout(predicate::str::contains("00000002: 4660"));

    ras_tool()
        .arg("read")
        .arg(file.path())
        .args(["--type", "u16le", "--offset", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00000002: 13330"));
}

#[test]
fn read_past_end_fails() {
    let file = temp_file_with(&[0x01, 0x02]);

    ras_tool()
        .arg("read")
        .arg(file.path())
        .args(["--type", "i32"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read 4-byte value at offset 0"));
}

#[test]
fn lines_handle_all_terminators() {
    let file = temp_file_with(b"one\r\ntwo\rthree\nfour");

    ras_tool()
        .arg("lines")
        .arg(file.path())
        .assert()
        .success()
        .stdout("one\ntwo\nthree\nfour\n");

    ras_tool()
        .args(["--in-memory", "lines"])
        .arg(file.path())
        .args(["--max", "1"])
        .assert()
        .success()
        .stdout("one\n");
}

#[test]
fn string_with_encoding() {
    let file = temp_file_with(&[0x00, 0x48, 0x00, 0x69]);

    ras_tool()
        .arg("string")
        .arg(file.path())
        .args(["--length", "4", "--encoding", "UTF-16BE"])
        .assert()
        .success()
        .stdout("Hi\n");

    ras_tool()
        .arg("string")
        .arg(file.path())
        .args(["--length", "4", "--encoding", "EBCDIC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown text encoding: EBCDIC"));
}

#[test]
fn missing_file_fails() {
    ras_tool()
        .args(["info", "/nonexistent/ras-tool/input.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

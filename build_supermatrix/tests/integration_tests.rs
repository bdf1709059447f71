use std::process::Command;
use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_locus(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("build_supermatrix")?;
    cmd.assert()
        .failure();
    Ok(())
}

#[test]
fn test_two_loci() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let locus_a = write_locus(temp_dir.path(), "locus_a.fasta",
        ">accA Homo sapiens gene a, partial sequence\nACGT\n>accA2 Mus musculus gene a\nACGA\n");
    let locus_b = write_locus(temp_dir.path(), "locus_b.fasta",
        ">accB Homo sapiens gene b\nTTT\n>accB2 Homo sapiens gene b\nGGG\n");
    let output = temp_dir.path().join("alignments").join("combined.fasta");
    let provenance = temp_dir.path().join("provenance.tsv");

    let mut cmd = Command::cargo_bin("build_supermatrix")?;
    cmd.arg("-i").arg(&locus_a)
        .arg("-i").arg(&locus_b)
        .arg("-o").arg(&output)
        .arg("--provenance").arg(&provenance)
        .arg("--otu-details");
    let assert = cmd.assert().success();

    let combined = fs::read_to_string(&output)?;
    assert_eq!(combined, "> Homo sapiens\nACGTTTT\n> Mus musculus\nACGA---\n");

    let table = fs::read_to_string(&provenance)?;
    assert_eq!(table, "OTU\tlocus_a.fasta\tlocus_b.fasta\nHomo sapiens\taccA:4\taccB:3\nMus musculus\taccA2:4\t-:0\n");

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("Total number of OTUs = 2"), "{}", stdout);
    assert!(stdout.contains("Total length of matrix = 7"), "{}", stdout);
    assert!(stdout.contains("Accessions = [\"accA2\", \"-\"]"), "{}", stdout);
    Ok(())
}

#[test]
fn test_line_width() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let locus = write_locus(temp_dir.path(), "locus.fasta", &format!(">acc Zea mays\n{}\n", "A".repeat(100)));
    let output = temp_dir.path().join("combined.fasta");

    let mut cmd = Command::cargo_bin("build_supermatrix")?;
    cmd.arg("-i").arg(&locus).arg("-o").arg(&output).arg("-w").arg("60");
    cmd.assert().success();

    let combined = fs::read_to_string(&output)?;
    let lengths = combined.lines().skip(1).map(str::len).collect::<Vec<_>>();
    assert_eq!(lengths, vec![60, 40]);
    Ok(())
}

#[test]
fn test_width_mismatch_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let locus = write_locus(temp_dir.path(), "locus.fasta", ">a Homo sapiens\nACGT\n>b Mus musculus\nAC\n");
    let output = temp_dir.path().join("combined.fasta");

    let mut cmd = Command::cargo_bin("build_supermatrix")?;
    cmd.arg("-i").arg(&locus).arg("-o").arg(&output);
    cmd.assert().failure();
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_malformed_description_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let locus = write_locus(temp_dir.path(), "locus.fasta", ">a Homo\nACGT\n");
    let output = temp_dir.path().join("combined.fasta");

    let mut cmd = Command::cargo_bin("build_supermatrix")?;
    cmd.arg("-i").arg(&locus).arg("-o").arg(&output);
    cmd.assert().failure();
    assert!(!output.exists());
    Ok(())
}

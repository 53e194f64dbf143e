use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_jsonl_handling() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"method":"upi","vpa":"user@bank"}}"#).unwrap();
    writeln!(file, "this is not json").unwrap();
    writeln!(file, r#"{{"method":"card","card":{{"number":"4111 1111 1111 1111","expiry_month":12,"expiry_year":"30"}}}}"#).unwrap();
    writeln!(file, r#"{{"method":"card","card":{{"number":1234}}}}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout-validator"));
    cmd.arg(file.path())
        .arg("--format")
        .arg("jsonl")
        .arg("--as-of")
        .arg("2026-10")
        .env_remove("RUST_LOG");

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Error reading payment request").count(), 1);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let results: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0],
        serde_json::json!({ "row": 1, "method": "upi", "valid": true })
    );
    assert_eq!(
        results[1],
        serde_json::json!({
            "row": 3, "method": "card", "valid": true, "network": "visa", "last4": "1111"
        })
    );
    assert_eq!(
        results[2],
        serde_json::json!({
            "row": 4, "method": "card", "valid": false, "error_code": "INVALID_CARD_NUMBER"
        })
    );
}

#[test]
fn test_wrongly_typed_jsonl_fields_are_classified() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"method":"upi","vpa":123}}"#).unwrap();
    writeln!(file, r#"{{"method":7}}"#).unwrap();
    writeln!(file, r#"{{"method":"card","card":{{"number":4111111111111111,"expiry_month":"12","expiry_year":"30"}}}}"#).unwrap();
    writeln!(file, r#"{{"method":"card","card":{{"number":"4111111111111111","expiry_month":12.0,"expiry_year":"30"}}}}"#).unwrap();
    writeln!(file, r#"{{"method":"card","card":{{"number":"4111111111111111","expiry_month":"12","expiry_year":true}}}}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout-validator"));
    cmd.arg(file.path())
        .arg("--format")
        .arg("jsonl")
        .arg("--as-of")
        .arg("2026-10")
        .env_remove("RUST_LOG");

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Error reading payment request"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let results: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(
        results,
        vec![
            serde_json::json!({ "row": 1, "method": "upi", "valid": false, "error_code": "MALFORMED_VPA" }),
            serde_json::json!({ "row": 2, "valid": false, "error_code": "UNSUPPORTED_METHOD" }),
            serde_json::json!({ "row": 3, "method": "card", "valid": false, "error_code": "INVALID_CARD_NUMBER" }),
            serde_json::json!({ "row": 4, "method": "card", "valid": false, "error_code": "INVALID_EXPIRY" }),
            serde_json::json!({ "row": 5, "method": "card", "valid": false, "error_code": "INVALID_EXPIRY" }),
        ]
    );
}

#[test]
fn test_invalid_utf8_csv_row() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"method,vpa,card_number,expiry_month,expiry_year\n")
        .unwrap();
    file.write_all(b"upi,user@bank,,,\n").unwrap();
    file.write_all(b"upi,\xff\xfe@bank,,,\n").unwrap();
    file.write_all(b"upi,other@bank,,,\n").unwrap();

    let mut cmd = Command::new(cargo_bin!("checkout-validator"));
    cmd.arg(file.path())
        .arg("--as-of")
        .arg("2026-10")
        .env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment request"))
        .stdout(predicate::str::contains("1,upi,true,,,"))
        .stdout(predicate::str::contains("3,upi,true,,,"));
}

#[test]
fn test_untrimmed_and_missing_fields() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "method, vpa, card_number, expiry_month, expiry_year").unwrap();
    writeln!(file, "  card ,  , 4532-0151-1283-0366 , 3 , 2030 ").unwrap();
    writeln!(file, "card").unwrap(); // no card fields at all
    writeln!(file, "upi").unwrap(); // no vpa
    writeln!(file, ",user@bank").unwrap(); // no method

    let mut cmd = Command::new(cargo_bin!("checkout-validator"));
    cmd.arg(file.path()).arg("--as-of").arg("2026-10");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,card,true,visa,0366,"))
        .stdout(predicate::str::contains("2,card,false,,,INVALID_CARD_NUMBER"))
        .stdout(predicate::str::contains("3,upi,false,,,MALFORMED_VPA"))
        .stdout(predicate::str::contains("4,,false,,,UNSUPPORTED_METHOD"));
}

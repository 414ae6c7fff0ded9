mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_bank_transfer_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("campus-pay"));
    cmd.arg("tests/fixtures/bank_tuition.csv").arg("--instant");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"step\": \"success\""))
        .stdout(predicate::str::contains("\"total\": 50000"))
        .stderr(predicate::str::contains(
            "Payment of Ksh 50,000 was successful!",
        ));

    Ok(())
}

#[test]
fn test_cli_mpesa_flow() {
    let script = common::write_script(&[
        "category,cafeteria",
        "toggle,custom-meal",
        "amount,custom-meal,500",
        "describe,snack",
        "proceed",
        "method,mpesa",
        "phone,0712345678",
        "wait",
        "pin,1234",
        "wait",
        "pin,1234",
    ]);

    let mut cmd = Command::new(cargo_bin!("campus-pay"));
    cmd.arg(script.path()).arg("--instant");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"step\": \"success\""))
        .stdout(predicate::str::contains("\"method\": \"mpesa\""))
        .stdout(predicate::str::contains("You have paid Ksh 500 via M-Pesa."));
}

#[test]
fn test_cli_stops_at_bank_details_without_confirmation() {
    let script = common::write_script(&[
        "category,fees",
        "toggle,library",
        "toggle,lab",
        "describe,Semester 2 extras",
        "proceed",
        "method,bank",
    ]);

    let mut cmd = Command::new(cargo_bin!("campus-pay"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 7000"))
        .stdout(predicate::str::contains("Transfer exactly KSh 7,000"))
        .stdout(predicate::str::contains("\"notifications\": []"));
}

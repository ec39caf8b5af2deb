use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn labor_cost_uses_employment_defaults() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("callcenter");
    cmd.args(["labor-cost", "--gross-salary", "5000", "-n", "3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Labor Cost (employment contract)"))
        .stdout(predicate::str::contains("Employer contributions | 21.98%"))
        .stdout(predicate::str::contains("Cost per employee | 6099.00"))
        .stdout(predicate::str::contains("Cost of all employees (3) | 18297.00"));
}

#[test]
fn labor_cost_applies_single_rate_override() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("callcenter");
    cmd.args([
        "labor-cost",
        "--contract",
        "mandate",
        "--gross-salary",
        "1000",
        "--accident",
        "3.33",
        "-n",
        "1",
    ]);

    // 9.76 + 6.50 + 3.33
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Employer contributions | 19.59%"))
        .stdout(predicate::str::contains("Cost per employee | 1195.90"));
}

#[test]
fn labor_cost_reads_headcount_from_scenario() {
    let scenario = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario
        .write_str("simulation:\n  consultants: 7\nlabor:\n  contract: specific-work\n  gross_salary: 4000\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("callcenter");
    cmd.args(["labor-cost", "-i", scenario.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cost per employee | 4000.00"))
        .stdout(predicate::str::contains("Cost of all employees (7) | 28000.00"));
}

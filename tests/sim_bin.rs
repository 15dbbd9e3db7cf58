use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "7"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 7);
    let winner = v["winner"].as_str().unwrap();
    assert!(winner == "user" || winner == "computer");
    assert_eq!(v["outcome"], format!("{}_wins", winner));
    assert!(v["turns"].as_u64().unwrap() > 0);
    let loser_live = if winner == "user" {
        &v["computer_live"]
    } else {
        &v["user_live"]
    };
    assert_eq!(loser_live, 0);
}

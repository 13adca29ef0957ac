use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn shoplist(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shoplist").unwrap();
    cmd.env("SHOPLIST_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_add_toggle_and_banner() {
    let temp_dir = tempfile::tempdir().unwrap();

    shoplist(temp_dir.path())
        .write_stdin("name Milk\nshop Lidl\ncategory Fruit\nadd\ntoggle 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Milk (Lidl, Fruit)"))
        .stdout(predicate::str::contains("Milk marked as bought"))
        .stdout(predicate::str::contains("Shopping Completed!"))
        .stdout(predicate::str::contains("shoplist> ").not());
}

#[test]
fn test_incomplete_add_keeps_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();

    shoplist(temp_dir.path())
        .write_stdin("name Bread\nadd\nshop Jumbo\ncat bakery\nadd\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Please fill in all fields!"))
        .stdout(predicate::str::contains("Added Bread (Jumbo, Bakery)"));
}

#[test]
fn test_no_banner_on_empty_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    shoplist(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."))
        .stdout(predicate::str::contains("Shopping Completed!").not());
}

#[test]
fn test_filters_hide_rows_but_keep_numbers() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = "\
add Milk -s Lidl -c Fruit
add Bread -s Jumbo -c Bakery
add Apples -s Lidl -c Fruit
filter shop lidl
filter name app
";

    let output = shoplist(temp_dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    // The last rendered view only holds Apples, still numbered 3
    let last_view = stdout.rsplit("Filters:").nth(1).unwrap();
    let last_table = last_view.rsplit("Category").next().unwrap();
    assert!(last_table.contains("3."));
    assert!(last_table.contains("Apples"));
    assert!(!last_table.contains("Milk"));
    assert!(stdout.contains("Filters: name contains \"app\", shop = Lidl"));
}

#[test]
fn test_delete_and_unmatched_selector() {
    let temp_dir = tempfile::tempdir().unwrap();

    shoplist(temp_dir.path())
        .write_stdin("add Milk -s Lidl -c Fruit\ndelete 1\ntoggle 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Milk"))
        .stdout(predicate::str::contains("No product matches 1"));
}

#[test]
fn test_unknown_command_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();

    shoplist(temp_dir.path())
        .write_stdin("fly away\nshops\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("type 'help' for commands"))
        .stdout(predicate::str::contains("Kruidvat"));
}

#[test]
fn test_custom_catalog_from_config_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"shops": ["Aldi"], "categories": ["Dairy"]}"#,
    )
    .unwrap();

    shoplist(temp_dir.path())
        .write_stdin("add Yoghurt -s aldi -c dairy\nshop Lidl\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Yoghurt (Aldi, Dairy)"))
        .stderr(predicate::str::contains("Unknown shop: Lidl"));
}

#[test]
fn test_explicit_config_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &config_path,
        r#"{"shops": ["Market"], "categories": ["Cheese"]}"#,
    )
    .unwrap();

    shoplist(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .write_stdin("categories\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheese"))
        .stdout(predicate::str::contains("Bakery").not());
}

#[test]
fn test_invalid_config_fails_at_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("catalog.json");
    std::fs::write(&config_path, r#"{"shops": ["Lidl", "lidl"]}"#).unwrap();

    shoplist(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_script_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("weekly.txt");
    std::fs::write(
        &script,
        "# weekly groceries\nadd Steak -s Jumbo -c Butcher\nquit\nadd Pears -s Lidl -c Fruit\n",
    )
    .unwrap();

    shoplist(temp_dir.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Steak (Jumbo, Butcher)"))
        .stdout(predicate::str::contains("Pears").not());
}

#[test]
fn test_list_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = shoplist(temp_dir.path())
        .write_stdin("add Carrots -s Ethos -c Vegetable\nlist --json\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    // Table rows also start with '[', the pretty-printed array is "[\n"
    let json_start = stdout.find("[\n").unwrap();
    let products: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(products[0]["name"], "Carrots");
    assert_eq!(products[0]["shop"], "Ethos");
    assert_eq!(products[0]["category"], "Vegetable");
}
